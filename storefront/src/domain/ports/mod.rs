//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Source`) describe what the domain needs from the
//! marketplace API and report failures as [`StorefrontApiError`]. Driving
//! ports describe what presentation adapters can ask of the domain and report
//! failures as [`crate::domain::Error`].

mod macros;
pub(crate) use macros::define_port_error;

mod blog_source;
mod blog_views;
mod comment_source;
mod product_comments;

#[cfg(test)]
pub use blog_source::MockBlogSource;
pub use blog_source::{BlogSource, FixtureBlogSource, StorefrontApiError};
#[cfg(test)]
pub use blog_views::MockBlogViews;
pub use blog_views::BlogViews;
#[cfg(test)]
pub use comment_source::MockCommentSource;
pub use comment_source::{CommentSource, FixtureCommentSource};
#[cfg(test)]
pub use product_comments::MockProductComments;
pub use product_comments::ProductComments;
