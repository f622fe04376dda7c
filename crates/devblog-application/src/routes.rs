//! In-app routes and the sign-in guard.

use std::fmt;

use devblog_core::article::ArticleId;
use devblog_core::identity::User;

/// A navigable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Sign-in page; `from` is where to return after signing in.
    Login { from: Option<String> },
    Register,
    Dashboard,
    Article(ArticleId),
    NotFound,
}

impl Route {
    /// Parses an in-app path. Unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login { from: None },
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            _ => match trimmed.strip_prefix("/article/") {
                Some(id) if !id.is_empty() && !id.contains('/') => match id.parse() {
                    Ok(id) => Route::Article(id),
                    Err(never) => match never {},
                },
                _ => Route::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login { .. } => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Article(id) => format!("/article/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Dashboard and article details are only for signed-in users.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Article(_))
    }

    /// Applies the sign-in guard: protected routes redirect to login,
    /// remembering where the user was headed.
    pub fn resolve(self, user: Option<&User>) -> Route {
        if self.requires_auth() && user.is_none() {
            Route::Login {
                from: Some(self.path()),
            }
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Destination of an article card's "Read More" action.
pub fn read_more(article_id: &ArticleId, user: Option<&User>) -> Route {
    Route::Article(article_id.clone()).resolve(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login { from: None });
        assert_eq!(Route::parse("/register/"), Route::Register);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(
            Route::parse("/article/1905"),
            Route::Article(ArticleId::Number(1905))
        );
        assert_eq!(
            Route::parse("/article/intro-post"),
            Route::Article(ArticleId::Text("intro-post".into()))
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/settings"), Route::NotFound);
        assert_eq!(Route::parse("/article/"), Route::NotFound);
        assert_eq!(Route::parse("/article/a/b"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Register,
            Route::Dashboard,
            Route::Article(ArticleId::Number(7)),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_when_signed_out() {
        assert_eq!(
            Route::Dashboard.resolve(None),
            Route::Login {
                from: Some("/dashboard".into())
            }
        );
        assert_eq!(Route::Home.resolve(None), Route::Home);
    }

    #[test]
    fn test_read_more() {
        let id = ArticleId::Number(42);
        assert_eq!(
            read_more(&id, None),
            Route::Login {
                from: Some("/article/42".into())
            }
        );

        let user = User::new("u1");
        assert_eq!(read_more(&id, Some(&user)), Route::Article(id));
    }
}
