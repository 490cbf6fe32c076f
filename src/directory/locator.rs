//! API base URL handling and credential wrappers for the directory.

use url::Url;

use super::error::DirectoryError;
use super::models::{AccessKind, BlockListId, EntryId};

const WORKER_SEARCH_PATH: &str = "user/list-workers/";
const ACCESS_GROUP_PATH: &str = "requester-access-group/";
const RETRIEVE_GLOBAL_PATH: &str = "requester-access-group/retrieve-global/";
const ENTRY_PATH: &str = "worker-access-entry/";
const ENTRIES_BY_GROUP_PATH: &str = "worker-access-entry/list-by-group/";

/// Bearer token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, DirectoryError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Parsed API base URL and the endpoints derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLocator {
    api_base: Url,
}

impl DirectoryLocator {
    /// Parses the API base URL, e.g. `https://daemo.example/api/`.
    ///
    /// A trailing slash is added when missing so that endpoint paths join
    /// beneath the base rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` when the input does not parse, is
    /// not HTTP(S), or carries a query or fragment.
    pub fn parse(input: &str) -> Result<Self, DirectoryError> {
        let mut api_base = Url::parse(input.trim())
            .map_err(|error| DirectoryError::InvalidUrl(error.to_string()))?;

        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(DirectoryError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                api_base.scheme()
            )));
        }
        if api_base.query().is_some() || api_base.fragment().is_some() {
            return Err(DirectoryError::InvalidUrl(
                "API URL must not include a query or fragment".to_owned(),
            ));
        }

        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }

        Ok(Self { api_base })
    }

    /// API base URL, always ending with `/`.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn join(&self, path: &str) -> Result<Url, DirectoryError> {
        self.api_base
            .join(path)
            .map_err(|error| DirectoryError::InvalidUrl(format!("{path}: {error}")))
    }

    /// Worker search endpoint with the query attached.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` if the endpoint cannot be joined.
    pub fn worker_search_url(&self, query: &str) -> Result<Url, DirectoryError> {
        let mut url = self.join(WORKER_SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("pattern", query);
        Ok(url)
    }

    /// Endpoint that creates access-control groups.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` if the endpoint cannot be joined.
    pub fn access_groups_url(&self) -> Result<Url, DirectoryError> {
        self.join(ACCESS_GROUP_PATH)
    }

    /// Endpoint returning the requester's global group of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` if the endpoint cannot be joined.
    pub fn global_group_url(&self, kind: AccessKind) -> Result<Url, DirectoryError> {
        let mut url = self.join(RETRIEVE_GLOBAL_PATH)?;
        url.query_pairs_mut().append_pair("type", kind.as_str());
        Ok(url)
    }

    /// Endpoint that creates entries.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` if the endpoint cannot be joined.
    pub fn entries_url(&self) -> Result<Url, DirectoryError> {
        self.join(ENTRY_PATH)
    }

    /// Endpoint listing the entries of one block list.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` if the endpoint cannot be joined.
    pub fn entries_by_group_url(&self, group: &BlockListId) -> Result<Url, DirectoryError> {
        let mut url = self.join(ENTRIES_BY_GROUP_PATH)?;
        url.query_pairs_mut().append_pair("group", group.as_str());
        Ok(url)
    }

    /// Endpoint addressing a single entry.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidUrl` if the endpoint cannot be joined.
    pub fn entry_url(&self, entry: &EntryId) -> Result<Url, DirectoryError> {
        let mut url = self.entries_url()?;
        url.path_segments_mut()
            .map_err(|()| DirectoryError::InvalidUrl("API URL cannot be a base".to_owned()))?
            .pop_if_empty()
            .push(entry.as_str())
            .push("");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ApiToken, DirectoryLocator};
    use crate::directory::error::DirectoryError;
    use crate::directory::models::{AccessKind, BlockListId, EntryId};

    fn locator() -> DirectoryLocator {
        DirectoryLocator::parse("https://daemo.example/api").expect("locator should parse")
    }

    #[rstest]
    fn appends_trailing_slash_to_base() {
        assert_eq!(locator().api_base().as_str(), "https://daemo.example/api/");
    }

    #[rstest]
    #[case::not_a_url("daemo.example/api")]
    #[case::ftp("ftp://daemo.example/api/")]
    #[case::query("https://daemo.example/api/?x=1")]
    fn rejects_unusable_bases(#[case] input: &str) {
        let result = DirectoryLocator::parse(input);
        assert!(
            matches!(result, Err(DirectoryError::InvalidUrl(_))),
            "expected InvalidUrl, got {result:?}"
        );
    }

    #[rstest]
    fn builds_search_url_with_encoded_pattern() {
        let url = locator()
            .worker_search_url("ann lee")
            .expect("search url");
        assert_eq!(
            url.as_str(),
            "https://daemo.example/api/user/list-workers/?pattern=ann+lee"
        );
    }

    #[rstest]
    fn builds_group_urls() {
        let locator = locator();
        assert_eq!(
            locator
                .global_group_url(AccessKind::Deny)
                .expect("global url")
                .as_str(),
            "https://daemo.example/api/requester-access-group/retrieve-global/?type=deny"
        );
        assert_eq!(
            locator
                .entries_by_group_url(&BlockListId::new("5"))
                .expect("by-group url")
                .as_str(),
            "https://daemo.example/api/worker-access-entry/list-by-group/?group=5"
        );
    }

    #[rstest]
    fn entry_url_keeps_trailing_slash() {
        let url = locator()
            .entry_url(&EntryId::new("42"))
            .expect("entry url");
        assert_eq!(
            url.as_str(),
            "https://daemo.example/api/worker-access-entry/42/"
        );
    }

    #[rstest]
    fn rejects_blank_token() {
        let result = ApiToken::new("   ");
        assert!(
            matches!(result, Err(DirectoryError::MissingToken)),
            "expected MissingToken, got {result:?}"
        );
    }

    #[rstest]
    fn debug_output_hides_token() {
        let token = ApiToken::new("secret").expect("token should be valid");
        assert_eq!(format!("{token:?}"), "ApiToken(***)");
        assert_eq!(token.value(), "secret");
    }
}
