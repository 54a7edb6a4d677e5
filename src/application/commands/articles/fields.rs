use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleContent, ArticleFields, ArticleStatus, ArticleTitle},
};

/// Raw client input for the writable article columns. Every field is optional
/// at this point so a missing one surfaces as an operation failure rather than
/// a decoding error.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}

impl ArticleInput {
    pub(super) fn into_fields(self) -> ApplicationResult<ArticleFields> {
        let title = self
            .title
            .ok_or_else(|| ApplicationError::validation("title is required"))?;
        let content = self
            .content
            .ok_or_else(|| ApplicationError::validation("content is required"))?;
        let status = self
            .status
            .ok_or_else(|| ApplicationError::validation("status is required"))?;

        Ok(ArticleFields::new(
            ArticleTitle::new(title)?,
            ArticleContent::new(content)?,
            ArticleStatus::new(status)?,
        ))
    }
}
