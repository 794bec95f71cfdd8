//! The folder resource: [`Folder`] and the operations on it.
//!
//! Every operation is a single request, succeeding only when the server answers `200 OK`.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod rename;
pub mod search;

pub(crate) const BASE_PATH: &str = "/api/folders";

/// A structure representing a folder on Grafana
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    /// Numeric identifier, assigned by the server
    pub id: i64,
    /// Unique identifier, assigned by the server or picked on creation
    pub uid: String,
    pub title: String,
}

/// Path of a single folder, the identifier is percent-encoded into one segment
#[inline]
pub(crate) fn folder_path(identifier: &str) -> String {
    format!("{BASE_PATH}/{}", urlencoding::encode(identifier))
}

#[cfg(test)]
mod tests {
    use super::{folder_path, Folder};

    #[test]
    fn should_ignore_unknown_fields() {
        let folder: Folder = serde_json::from_str(
            r#"{"id":1,"uid":"nErXDvCkzz","title":"Department ABC","url":"/dashboards/f/nErXDvCkzz/department-abc","hasAcl":false,"version":1}"#,
        )
        .unwrap();
        assert_eq!(
            folder,
            Folder {
                id: 1,
                uid: "nErXDvCkzz".into(),
                title: "Department ABC".into(),
            }
        );
    }

    #[test]
    fn should_reject_missing_uid() {
        assert!(serde_json::from_str::<Folder>(r#"{"id":1,"title":"Ops"}"#).is_err());
    }

    #[test]
    fn should_encode_identifier_as_one_segment() {
        assert_eq!(folder_path("nErXDvCkzz"), "/api/folders/nErXDvCkzz");
        assert_eq!(folder_path("a?b"), "/api/folders/a%3Fb");
        assert_eq!(folder_path("a/b#c"), "/api/folders/a%2Fb%23c");
    }
}
