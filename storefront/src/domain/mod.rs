//! Domain primitives, projections, and services.
//!
//! Purpose: turn marketplace API payloads into the read-only view models the
//! storefront renders. Projections are pure functions rebuilt on every fetch;
//! services wrap them around the driven ports in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure taxonomy.
//! - RawPost, PostSummary, PostDetail: blog payload and its view models.
//! - Product, CategoryCard: catalogue input and home page cards.
//! - Comment, CommentThread: product comments and their local thread.
//! - Notification: dismissible rendering of an [`Error`].

pub mod blog;
pub mod blog_view_service;
pub mod category;
pub mod comment;
pub mod comment_service;
pub mod error;
pub mod notification;
pub mod ports;
pub mod slug;

pub use self::blog::{
    EXCERPT_CHAR_LIMIT, EXCERPT_ELLIPSIS, NewPost, PostDetail, PostProduct, PostSummary, RawPost,
    SUMMARY_IMAGE_COUNT, excerpt, project_detail, project_summaries, project_summary,
    summary_images,
};
pub use self::blog_view_service::BlogViewService;
pub use self::category::{CategoryCard, Product, build_category_cards, category_path};
pub use self::comment::{Comment, CommentThread, NewComment};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::notification::{Notification, NotificationLevel};
pub use self::slug::{is_valid_slug, slugify};
