//! 页面地址
//!
//! 承载 `session_id` 查询参数，用于恢复会话和生成深链接

use crate::error::SurveyError;
use crate::models::SessionId;
use std::fmt;
use url::Url;

/// 地址中携带会话ID的查询参数名
pub const SESSION_PARAM: &str = "session_id";

/// 页面地址（不可变，改写时返回新值）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    url: Url,
}

impl PageAddress {
    pub fn parse(address: &str) -> Result<Self, SurveyError> {
        let url = Url::parse(address).map_err(|source| SurveyError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;
        Ok(Self { url })
    }

    /// 地址中的会话ID（空值视为没有）
    pub fn session_id(&self) -> Option<SessionId> {
        self.url
            .query_pairs()
            .find(|(name, _)| name == SESSION_PARAM)
            .and_then(|(_, value)| SessionId::new(value.into_owned()).ok())
    }

    /// 返回写入了会话ID的新地址
    ///
    /// 其他查询参数与片段保持不变，已有的 session_id 被替换。
    pub fn with_session_id(&self, session_id: &SessionId) -> Self {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(name, _)| name != SESSION_PARAM)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (name, value) in &kept {
                query.append_pair(name, value);
            }
            query.append_pair(SESSION_PARAM, session_id.as_str());
        }

        Self { url }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_existing_session_id() {
        let address = PageAddress::parse("https://example.org/survey?session_id=abc123").unwrap();
        assert_eq!(address.session_id().unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_empty_session_param_is_ignored() {
        let address = PageAddress::parse("https://example.org/survey?session_id=").unwrap();
        assert!(address.session_id().is_none());
    }

    #[test]
    fn test_with_session_id_keeps_other_params() {
        let address =
            PageAddress::parse("https://example.org/survey?lang=en#top").unwrap();
        let updated = address.with_session_id(&SessionId::new("xyz").unwrap());

        assert_eq!(
            updated.as_str(),
            "https://example.org/survey?lang=en&session_id=xyz#top"
        );
        assert_eq!(updated.session_id().unwrap().as_str(), "xyz");
        assert!(address.session_id().is_none());
    }

    #[test]
    fn test_with_session_id_replaces_existing_value() {
        let address = PageAddress::parse("https://example.org/?session_id=old").unwrap();
        let updated = address.with_session_id(&SessionId::new("new").unwrap());
        assert_eq!(updated.as_str(), "https://example.org/?session_id=new");
    }

    #[test]
    fn test_invalid_address_rejected() {
        assert!(matches!(
            PageAddress::parse("not a url"),
            Err(SurveyError::InvalidAddress { .. })
        ));
    }
}
