//! Command-line inbound adapter.
//!
//! Parses `storefront` subcommands with clap and dispatches them through the
//! driving ports. Every command resolves to a serialisable
//! [`CommandOutput`]; failures surface as domain [`Error`]s so the binary can
//! render them as notifications.

mod products;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pagination::PageWindow;
use serde::Serialize;
use tracing::debug;

use crate::domain::ports::{BlogViews, ProductComments};
use crate::domain::{
    CategoryCard, Comment, CommentThread, Error, NewPost, PostDetail, PostSummary,
    build_category_cards,
};

pub use products::{load_products, parse_products};

const DEFAULT_PER_PAGE: u64 = 10;

/// `storefront` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "storefront",
    about = "Browse marketplace blog posts, comments and categories",
    version
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Blog post listing, detail and publishing.
    #[command(subcommand)]
    Blogs(BlogsCommand),
    /// Product comment threads.
    #[command(subcommand)]
    Comments(CommentsCommand),
    /// Build home page category cards from a product list file.
    Categories {
        /// JSON file holding a product array or a `{ result: [...] }` envelope.
        #[arg(long, value_name = "path")]
        products: PathBuf,
    },
    /// Render the range label for a listing page.
    PageLabel {
        /// One-based page number.
        #[arg(long)]
        page: u64,
        /// Items shown per page.
        #[arg(long)]
        per_page: u64,
        /// Total number of items.
        #[arg(long)]
        total: u64,
    },
}

/// `blogs` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BlogsCommand {
    /// List post cards, one page at a time.
    List {
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Cards per page.
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u64,
    },
    /// Show one post.
    Show {
        /// Post identifier.
        id: i64,
    },
    /// Publish a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, value_name = "id")]
        author_id: i64,
        /// Product to feature in the post; repeat for several.
        #[arg(long = "product-id", value_name = "id")]
        product_ids: Vec<i64>,
    },
}

/// `comments` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CommentsCommand {
    /// List the comments on a product.
    List {
        #[arg(long, value_name = "id")]
        product_id: i64,
    },
    /// Comment on a product.
    Add {
        #[arg(long, value_name = "id")]
        product_id: i64,
        #[arg(long, value_name = "id")]
        user_id: i64,
        #[arg(long)]
        content: String,
    },
}

/// Driving ports the commands run against.
#[derive(Clone, Copy)]
pub struct CliServices<'a> {
    /// Blog view models.
    pub blogs: &'a dyn BlogViews,
    /// Product comments.
    pub comments: &'a dyn ProductComments,
}

/// One page of post cards with its range label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    /// Cards on the requested page.
    pub items: Vec<PostSummary>,
    /// "Showing X–Y of Z results".
    pub label: String,
    pub page_count: u64,
    pub has_next: bool,
}

/// Result of the `page-label` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLabel {
    #[serde(flatten)]
    pub window: PageWindow,
    pub label: String,
    pub page_count: u64,
    pub has_next: bool,
}

/// Output of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// `blogs list`.
    BlogPage(BlogPage),
    /// `blogs show` and `blogs create`.
    PostDetail(PostDetail),
    /// `comments list`.
    Comments(Vec<Comment>),
    /// `comments add`.
    Comment(Comment),
    /// `categories`.
    Categories(Vec<CategoryCard>),
    /// `page-label`.
    PageLabel(PageLabel),
}

/// Run `command` against `services`.
///
/// # Errors
///
/// Returns the domain error raised by the port, or
/// [`crate::domain::ErrorCode::InvalidRequest`] for arguments rejected
/// before any network call.
pub async fn execute(command: Command, services: CliServices<'_>) -> Result<CommandOutput, Error> {
    match command {
        Command::Blogs(blogs) => execute_blogs(blogs, services.blogs).await,
        Command::Comments(comments) => execute_comments(comments, services.comments).await,
        Command::Categories { products } => {
            let products = load_products(&products)?;
            let cards = build_category_cards(&products);
            debug!(products = products.len(), cards = cards.len(), "built category cards");
            Ok(CommandOutput::Categories(cards))
        }
        Command::PageLabel {
            page,
            per_page,
            total,
        } => {
            let window = page_window(page, per_page, total)?;
            Ok(CommandOutput::PageLabel(PageLabel {
                window,
                label: window.describe_range(),
                page_count: window.page_count(),
                has_next: window.has_next(),
            }))
        }
    }
}

async fn execute_blogs(command: BlogsCommand, blogs: &dyn BlogViews) -> Result<CommandOutput, Error> {
    match command {
        BlogsCommand::List { page, per_page } => {
            let summaries = blogs.list_summaries().await?;
            let total = u64::try_from(summaries.len()).unwrap_or(u64::MAX);
            let window = page_window(page, per_page, total)?;
            Ok(CommandOutput::BlogPage(BlogPage {
                items: window.paginate(&summaries).cloned().collect(),
                label: window.describe_range(),
                page_count: window.page_count(),
                has_next: window.has_next(),
            }))
        }
        BlogsCommand::Show { id } => blogs.get_detail(id).await.map(CommandOutput::PostDetail),
        BlogsCommand::Create {
            title,
            content,
            author_id,
            product_ids,
        } => blogs
            .create_post(NewPost {
                title,
                content,
                author_id,
                product_ids,
            })
            .await
            .map(CommandOutput::PostDetail),
    }
}

async fn execute_comments(
    command: CommentsCommand,
    comments: &dyn ProductComments,
) -> Result<CommandOutput, Error> {
    match command {
        CommentsCommand::List { product_id } => {
            let mut thread = CommentThread::new(product_id);
            thread.refresh(comments).await?;
            Ok(CommandOutput::Comments(thread.comments().to_vec()))
        }
        CommentsCommand::Add {
            product_id,
            user_id,
            content,
        } => {
            let mut thread = CommentThread::new(product_id);
            thread
                .submit(comments, user_id, &content)
                .await
                .map(CommandOutput::Comment)
        }
    }
}

fn page_window(page: u64, per_page: u64, total: u64) -> Result<PageWindow, Error> {
    PageWindow::try_new(page, per_page, total)
        .map_err(|error| Error::invalid_request(error.to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
