// src/dashboard.rs
use crate::bookmarks::BookmarkSet;
use crate::catalog::CatalogView;
use crate::chat_session::ChatSession;
use crate::profile_store::ProfileStore;
use crate::recommendation::RecommendationSession;
use crate::storage::ProfileStorage;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Schemes,
    Community,
    Chatbot,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Schemes, Tab::Community, Tab::Chatbot, Tab::Profile];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Schemes => "schemes",
            Tab::Community => "community",
            Tab::Chatbot => "chatbot",
            Tab::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Schemes => "Schemes",
            Tab::Community => "Community",
            Tab::Chatbot => "Chatbot",
            Tab::Profile => "Profile",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.slug() == slug)
    }

    /// Where a form post on this tab redirects back to.
    pub fn location(&self) -> String {
        format!("/?tab={}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot banner shown on the next render, then cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// All screen state of the dashboard, owned in one place.
pub struct Dashboard {
    pub tab: Tab,
    pub catalog: CatalogView,
    pub bookmarks: BookmarkSet,
    pub chat: ChatSession,
    pub recommendations: RecommendationSession,
    pub profile: ProfileStore,
    notice: Option<Notice>,
}

impl Dashboard {
    pub async fn load(storage: Arc<dyn ProfileStorage>) -> Self {
        Self {
            tab: Tab::default(),
            catalog: CatalogView::new(),
            bookmarks: BookmarkSet::new(),
            chat: ChatSession::new(),
            recommendations: RecommendationSession::new(),
            profile: ProfileStore::load(storage).await,
            notice: None,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn tab_slugs_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(Tab::from_slug("admin"), None);
        assert_eq!(Tab::Chatbot.location(), "/?tab=chatbot");
    }

    #[tokio::test]
    async fn notice_is_shown_once() {
        let mut dashboard = Dashboard::load(Arc::new(MemoryStorage::new())).await;
        assert_eq!(dashboard.tab, Tab::Schemes);

        dashboard.notify(NoticeKind::Success, "saved");
        assert_eq!(dashboard.take_notice().unwrap().text, "saved");
        assert!(dashboard.take_notice().is_none());
    }
}
