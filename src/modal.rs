//! Modal slot map - which transient overlay is currently visible.
//!
//! `Modals` holds one optional object per named slot. The store replaces
//! the whole map on every [`set_modals`](crate::Actions::set_modals) call
//! (full-replace, never a merge), so activating one slot closes every slot
//! not explicitly carried over. Each constructor below mirrors a UI call
//! site and populates exactly one slot; in practice at most one overlay is
//! visible at a time.

/// Parameters for the "add post" form overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddPostModal {
    pub user_id: u64,
}

/// Parameters for the user details overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserInfoModal {
    pub user_id: u64,
}

/// Parameters for the post details overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostInfoModal {
    pub user_id: u64,
    pub post_id: u64,
}

/// Parameters for the error overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfoModal {
    pub error_message: String,
}

/// Which slot is populated, for consumers rendering a single overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSlot {
    AddPost,
    UserInfo,
    PostInfo,
    ErrorInfo,
}

/// The complete modal slot map. `Default` is no active overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Modals {
    pub add_post: Option<AddPostModal>,
    pub user_info: Option<UserInfoModal>,
    pub post_info: Option<PostInfoModal>,
    pub error_info: Option<ErrorInfoModal>,
}

impl Modals {
    /// No active overlay. Setting this closes everything.
    pub fn none() -> Self {
        Modals::default()
    }

    /// Open the "add post" form for a user.
    pub fn add_post(user_id: u64) -> Self {
        Modals {
            add_post: Some(AddPostModal { user_id }),
            ..Modals::default()
        }
    }

    /// Open the user details overlay.
    pub fn user_info(user_id: u64) -> Self {
        Modals {
            user_info: Some(UserInfoModal { user_id }),
            ..Modals::default()
        }
    }

    /// Open the post details overlay.
    pub fn post_info(user_id: u64, post_id: u64) -> Self {
        Modals {
            post_info: Some(PostInfoModal { user_id, post_id }),
            ..Modals::default()
        }
    }

    /// Open the error overlay with a human-readable message.
    pub fn error_info(message: impl Into<String>) -> Self {
        Modals {
            error_info: Some(ErrorInfoModal {
                error_message: message.into(),
            }),
            ..Modals::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.add_post.is_none()
            && self.user_info.is_none()
            && self.post_info.is_none()
            && self.error_info.is_none()
    }

    /// The populated slot, if any. The error slot wins if several slots
    /// were somehow populated at once.
    pub fn active_slot(&self) -> Option<ModalSlot> {
        if self.error_info.is_some() {
            Some(ModalSlot::ErrorInfo)
        } else if self.add_post.is_some() {
            Some(ModalSlot::AddPost)
        } else if self.user_info.is_some() {
            Some(ModalSlot::UserInfo)
        } else if self.post_info.is_some() {
            Some(ModalSlot::PostInfo)
        } else {
            None
        }
    }
}
