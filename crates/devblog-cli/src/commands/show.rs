use anyhow::{Result, bail};
use devblog_application::Route;
use devblog_application::views::{ArticleDetailsViewModel, DetailsState};
use devblog_core::article::ArticleId;
use devblog_core::identity::IdentitySession;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext, id: ArticleId, user: Option<String>) -> Result<()> {
    let session = ctx.session(user, None);
    let current = session.current_user();

    if let Route::Login { from } = Route::Article(id.clone()).resolve(current.as_ref()) {
        println!(
            "Sign in required. Use --user to continue to {}.",
            from.unwrap_or_else(|| "/".to_string())
        );
        return Ok(());
    }

    let mut details = ArticleDetailsViewModel::new(ctx.repository.clone(), id);
    details.load().await;
    let tags = details.tags();

    match details.state() {
        DetailsState::Loaded(article) => {
            println!("{}", article.title);
            println!("by {}", article.author_name());
            if let Some(date) = &article.readable_publish_date {
                println!("{}", date);
            }
            if !tags.is_empty() {
                let tags: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
                println!("{}", tags.join(" "));
            }
            println!();
            match &article.body_html {
                Some(body) => println!("{}", body),
                None => println!("{}", article.description),
            }
            if let Some(url) = &article.url {
                println!("\n{}", url);
            }
        }
        state => {
            let message = state.error_message().unwrap_or("Article is still loading");
            bail!("{}", message);
        }
    }

    Ok(())
}
