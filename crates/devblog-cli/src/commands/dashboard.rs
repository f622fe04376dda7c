use anyhow::{Result, bail};
use devblog_application::views::{DashboardView, DashboardViewModel};

use crate::context::AppContext;

pub async fn run(ctx: &AppContext, user: String, name: Option<String>) -> Result<()> {
    let session = ctx.session(Some(user), name);
    let dashboard = DashboardViewModel::new(
        ctx.repository.clone(),
        ctx.storage.clone(),
        &session,
        ctx.config.dashboard_page_size,
    );
    dashboard.refresh().await;

    match dashboard.view().await {
        DashboardView::Loading => bail!("Dashboard is still loading"),
        DashboardView::Error { message } => bail!(message),
        DashboardView::Ready {
            greeting,
            saved_count,
            recommended,
        } => {
            println!("{}", greeting);
            println!("Saved articles: {}\n", saved_count);
            println!("Recommended for You");
            for article in &recommended {
                println!("  [{}] {} ({})", article.id, article.title, article.save_label());
                if !article.tags.is_empty() {
                    let tags: Vec<String> =
                        article.tags.iter().map(|t| format!("#{}", t)).collect();
                    println!("      {}", tags.join(" "));
                }
            }
        }
    }

    Ok(())
}
