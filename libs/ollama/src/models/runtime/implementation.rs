use crate::models::Models;

use super::{Runtime, TagsResponse, VersionResponse, TAGS_PATH, VERSION_PATH};

impl Runtime for Models {
    async fn version(&self) -> anyhow::Result<VersionResponse> {
        self.get_json(VERSION_PATH).await
    }

    async fn tags(&self) -> anyhow::Result<TagsResponse> {
        self.get_json(TAGS_PATH).await
    }
}
