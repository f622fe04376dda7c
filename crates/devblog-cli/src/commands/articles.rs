use anyhow::{Result, bail};
use devblog_application::views::{ArticleCard, HomeView, HomeViewModel};
use devblog_core::identity::IdentitySession;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext, search: Option<String>, user: Option<String>) -> Result<()> {
    let session = ctx.session(user, None);
    let mut home = HomeViewModel::new(ctx.repository.clone());

    home.refresh().await;
    if let Some(term) = search {
        home.set_search_term(term);
    }

    let current = session.current_user();
    match home.view(current.as_ref()).await {
        HomeView::Loading => bail!("Article list is still loading"),
        HomeView::Error { message } => bail!(message),
        HomeView::Articles {
            cards,
            result_count,
        } => {
            if let Some(count) = result_count {
                println!(
                    "Found {} results for \"{}\"\n",
                    count,
                    home.search_term()
                );
            }
            if cards.is_empty() {
                println!("No articles found.");
            }
            for card in &cards {
                print_card(card);
            }
        }
    }

    Ok(())
}

fn print_card(card: &ArticleCard) {
    println!("[{}] {}", card.id, card.title);
    if !card.description.is_empty() {
        println!("    {}", card.description);
    }

    let mut meta = vec![card.author_name.clone()];
    if let Some(published) = &card.published {
        meta.push(published.clone());
    }
    if let Some(minutes) = card.reading_time_minutes {
        meta.push(format!("{} min read", minutes));
    }
    meta.push(format!("{} reactions", card.reactions));
    meta.push(format!("{} comments", card.comments));
    println!("    {}", meta.join(" · "));

    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("    {}", tags.join(" "));
    }
    println!("    Read More -> {}\n", card.read_more);
}
