//! Paginated retrieval of every work published under an ISSN.

use crate::client::CrossrefClient;
use crate::config::api;
use crate::error::{HarvestError, HarvestResult};
use crate::models::{WorkList, WorkRecord};

/// Reject an empty ISSN before any I/O happens.
///
/// The ISSN also names the output files, so path separators are refused.
pub fn validate_issn(issn: &str) -> HarvestResult<&str> {
    let issn = issn.trim();
    if issn.is_empty() {
        return Err(HarvestError::validation(
            "issn",
            "ISSN is not defined; provide the ISSN of the journal to dump",
        ));
    }
    if issn.contains(['/', '\\']) {
        return Err(HarvestError::validation(
            "issn",
            format!("ISSN must not contain path separators, got {issn:?}"),
        ));
    }
    Ok(issn)
}

fn validate_per_page(per_page: u32) -> HarvestResult<u32> {
    if per_page == 0 || per_page > api::MAX_PER_PAGE {
        return Err(HarvestError::validation(
            "per_page",
            format!("must be between 1 and {}, got {per_page}", api::MAX_PER_PAGE),
        ));
    }
    Ok(per_page)
}

/// Fetch a single page of works starting at `offset`.
pub async fn fetch_page(
    client: &CrossrefClient,
    issn: &str,
    offset: u64,
) -> HarvestResult<WorkList> {
    let issn = validate_issn(issn)?;
    let rows = validate_per_page(client.per_page())?;

    Ok(client.journal_works(issn, offset, rows).await?)
}

/// Fetch every page for `issn` and return the kept records.
///
/// The total is read from the first response; pages are then requested at
/// `offset += per_page` until the offset reaches it, pausing for the
/// client's page delay between requests. Any failure aborts the whole run.
pub async fn collect_papers(
    client: &CrossrefClient,
    issn: &str,
) -> HarvestResult<Vec<WorkRecord>> {
    let issn = validate_issn(issn)?;
    let per_page = u64::from(validate_per_page(client.per_page())?);

    let first = fetch_page(client, issn, 0).await?;
    let total = first.total_results;
    tracing::info!(issn, total, "Found {total} papers");

    let mut papers = first.kept_records();
    let mut offset = per_page;
    tracing::info!(issn, "Collecting up to {offset} papers");

    while offset < total {
        tokio::time::sleep(client.page_delay()).await;

        let page = fetch_page(client, issn, offset).await?;
        papers.extend(page.kept_records());

        offset += per_page;
        tracing::info!(issn, "Collecting up to {offset} papers");
    }

    tracing::info!(issn, kept = papers.len(), total, "Finished collecting papers");
    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_issn() {
        assert!(validate_issn("").unwrap_err().is_validation());
        assert!(validate_issn("   ").unwrap_err().is_validation());
        assert_eq!(validate_issn(" 1234-5678 ").unwrap(), "1234-5678");
    }

    #[test]
    fn test_validate_issn_rejects_path_separators() {
        assert!(validate_issn("../x").unwrap_err().is_validation());
        assert!(validate_issn("1234/5678").unwrap_err().is_validation());
        assert!(validate_issn("..\\x").unwrap_err().is_validation());
        assert_eq!(validate_issn("2049-3630").unwrap(), "2049-3630");
    }

    #[test]
    fn test_validate_per_page() {
        assert!(validate_per_page(0).is_err());
        assert!(validate_per_page(1001).is_err());
        assert_eq!(validate_per_page(1000).unwrap(), 1000);
        assert_eq!(validate_per_page(1).unwrap(), 1);
    }
}
