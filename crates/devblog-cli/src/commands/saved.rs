use anyhow::{Context, Result};
use devblog_core::article::ArticleId;
use devblog_core::identity::UserId;
use devblog_core::saved::SavedArticlesRegistry;

use crate::context::AppContext;

pub fn list(ctx: &AppContext, user: String) -> Result<()> {
    let uid = UserId::new(user);
    let mut registry = SavedArticlesRegistry::new(ctx.storage.clone());
    let saved = registry.load(Some(&uid));

    if saved.is_empty() {
        println!("No saved articles for {}.", uid);
        return Ok(());
    }
    for id in saved.ids() {
        println!("{}", id);
    }
    Ok(())
}

pub fn toggle(ctx: &AppContext, user: String, id: ArticleId) -> Result<()> {
    let uid = UserId::new(user);
    let mut registry = SavedArticlesRegistry::new(ctx.storage.clone());

    let saved = registry
        .toggle(Some(&uid), &id)
        .with_context(|| format!("Failed to update saved articles for {}", uid))?;

    if saved {
        println!("Saved {} ({} saved)", id, registry.saved_count(Some(&uid)));
    } else {
        println!("Removed {} ({} saved)", id, registry.saved_count(Some(&uid)));
    }
    Ok(())
}
