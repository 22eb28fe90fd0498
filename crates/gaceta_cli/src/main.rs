use std::sync::Arc;

use clap::Parser;
use gaceta_core::{dates, Article, ArticleDraft, ArticleOrigin, Result};
use gaceta_doc::DocSource;
use gaceta_store::{create_storage, ArticleStore};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Published document to read articles from
    #[arg(long, env = "GACETA_DOC_URL")]
    doc_url: String,
    /// Override storage backend: json or memory
    #[arg(long, default_value = "json")]
    storage: String,
    /// Path of the local override file (json storage only)
    #[arg(long)]
    storage_path: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch the document and print the merged article list
    Fetch {
        /// Refetch even if a cached snapshot exists
        #[arg(long)]
        force: bool,
    },
    /// Show one article by slug
    Show { slug: String },
    /// Add a local override article
    Add {
        #[arg(long)]
        headline: String,
        #[arg(long)]
        body: String,
        #[arg(long, default_value = "Unknown author")]
        author: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Remove a local override article by id
    Remove { id: String },
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn print_articles(articles: &[Article]) {
    println!("Found {} articles", articles.len());
    for article in articles {
        let emoji = match article.origin {
            ArticleOrigin::Local => "📝",
            ArticleOrigin::Remote => "📰",
        };
        println!(
            "{} {} | {} ({})",
            emoji,
            dates::format(&article.date),
            article.headline,
            article.slug
        );
    }
}

fn print_article(article: &Article) {
    println!("{}", article.headline);
    println!("{} - {}", dates::format(&article.date), article.author);
    if let Some(image_url) = &article.image_url {
        println!("Image: {}", image_url);
    }
    println!();
    println!("{}", article.body);
    println!();
    println!("id: {}", article.id);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let storage = create_storage(&cli.storage, cli.storage_path.as_deref())?;
    info!("💾 Storage initialized (using {})", cli.storage);
    let source = Arc::new(DocSource::new(&cli.doc_url));
    let mut store = ArticleStore::new(source, storage);

    match cli.command {
        Commands::Fetch { force } => {
            let articles = store.refresh(force).await?;
            print_articles(&articles);
        }
        Commands::Show { slug } => {
            store.refresh(false).await?;
            let article = store.find_by_slug(&slug).await?;
            print_article(&article);
        }
        Commands::Add {
            headline,
            body,
            author,
            image_url,
        } => {
            let article = store
                .add(ArticleDraft {
                    headline,
                    body,
                    author,
                    image_url,
                    date: None,
                })
                .await?;
            println!("Added local article {} ({})", article.headline, article.id);
        }
        Commands::Remove { id } => {
            // Fetch first so document articles are recognized and refused;
            // when the document is unreachable, local removal still works.
            if let Err(e) = store.refresh(false).await {
                info!("Skipping document fetch before removal: {}", e);
            }
            store.remove(&id).await?;
            println!("Removed local article {}", id);
        }
        Commands::Serve { addr } => {
            let state = gaceta_web::AppState::new(store);
            gaceta_web::serve(state, &addr).await?;
        }
    }

    Ok(())
}
