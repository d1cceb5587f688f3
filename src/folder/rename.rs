//! Resources needed to rename a folder of the drive.

use crate::client::HttpClient;
use crate::error::Error;
use crate::folder::Folder;
use crate::prelude::HttpCommand;
use crate::response::Envelope;

/// Command to change the title of an existing folder.
///
/// ```rust,no_run
/// use document360::client::HttpClientBuilder;
/// use document360::folder::rename::FolderRenameCommand;
/// use document360::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env()
///     .build()
///     .expect("couldn't create client");
/// let folder = FolderRenameCommand::new("8e764116-4a37-4c3c-ba64-9bb4b2b713e4", "Archives")
///     .execute(&client)
///     .await
///     .expect("couldn't rename the folder");
/// println!("folder is now named {}", folder.title);
/// # })
/// ```
#[derive(Debug)]
pub struct FolderRenameCommand {
    folder_id: String,
    title: String,
}

impl FolderRenameCommand {
    pub fn new<I: Into<String>, S: Into<String>>(folder_id: I, title: S) -> Self {
        Self {
            folder_id: folder_id.into(),
            title: title.into(),
        }
    }
}

#[derive(serde::Serialize)]
struct FolderRenameParams<'a> {
    title: &'a str,
    user_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl HttpCommand for FolderRenameCommand {
    type Output = Folder;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        if self.title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        let params = FolderRenameParams {
            title: &self.title,
            user_id: client.user_id(),
        };
        let envelope: Envelope<Folder> = client
            .put(&self.folder_id, &params)
            .await?
            .accept(&[200])?
            .decode()?;
        envelope.payload()
    }
}

#[cfg(test)]
mod tests {
    use super::FolderRenameCommand;
    use crate::client::HttpClientBuilder;
    use crate::credentials::Credentials;
    use crate::error::Error;
    use crate::prelude::HttpCommand;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/8e764116-4a37-4c3c-ba64-9bb4b2b713e4")
            .match_header("api_token", "access-token")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "title": "Archives",
                "user_id": "user-1"
            })))
            .with_status(200)
            .with_body(
                r#"{
    "success": true,
    "data": {
        "id": "8e764116-4a37-4c3c-ba64-9bb4b2b713e4",
        "title": "Archives",
        "updated_on": "2024-03-06T11:12:43.000Z",
        "items_count": 3
    }
}"#,
            )
            .create();
        let client = crate::tests::build_client(server.url());
        let folder = FolderRenameCommand::new("8e764116-4a37-4c3c-ba64-9bb4b2b713e4", "Archives")
            .execute(&client)
            .await
            .unwrap();
        assert_eq!(folder.title, "Archives");
        assert_eq!(folder.items_count, 3);
        m.assert();
    }

    #[tokio::test]
    async fn error_declared_by_the_api() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/8e764116-4a37-4c3c-ba64-9bb4b2b713e4")
            .with_status(200)
            .with_body(r#"{"success": false, "errors": [{"description": "folder not found"}]}"#)
            .create();
        let client = crate::tests::build_client(server.url());
        let error = FolderRenameCommand::new("8e764116-4a37-4c3c-ba64-9bb4b2b713e4", "Archives")
            .execute(&client)
            .await
            .unwrap_err();
        match error {
            Error::Api(errors) => assert_eq!(errors[0].description, "folder not found"),
            other => panic!("unexpected error {:?}", other),
        }
        m.assert();
    }

    #[tokio::test]
    async fn error_status() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/unknown-folder")
            .with_status(404)
            .with_body(r#"{"errors": [{"description": "folder not found"}]}"#)
            .create();
        let client = crate::tests::build_client(server.url());
        let error = FolderRenameCommand::new("unknown-folder", "Archives")
            .execute(&client)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Protocol(404, _)));
        m.assert();
    }

    #[tokio::test]
    async fn error_empty_title() {
        crate::tests::init();
        // no server here, the command fails before reaching the network
        let client = HttpClientBuilder::default()
            .with_credentials(Credentials::new("access-token"))
            .build()
            .unwrap();
        let error = FolderRenameCommand::new("8e764116", "")
            .execute(&client)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::EmptyTitle));
    }
}
