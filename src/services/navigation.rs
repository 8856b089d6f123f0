// src/services/navigation.rs

use crate::models::page::{Layout, Route, SidebarItem};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/settings";

// Itens da barra lateral, na ordem exibida.
// "Settings" não tem página própria: o link cai na página 404.
const SIDEBAR: [(&str, &str); 6] = [
    ("Dashboard", HOME_PATH),
    ("Subscriptions", "/subscriptions"),
    ("Products", "/products"),
    ("Clients", "/clients"),
    ("Licenses", "/licenses"),
    ("Settings", SETTINGS_PATH),
];

impl Route {
    pub fn from_path(path: &str) -> Self {
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match normalized {
            "/" => Route::Dashboard,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/clients" => Route::Clients,
            "/products" => Route::Products,
            "/subscriptions" => Route::Subscriptions,
            "/licenses" => Route::Licenses,
            _ => Route::NotFound,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Dashboard => "Dashboard",
            Route::Clients => "Clients",
            Route::Products => "Products",
            Route::Subscriptions => "Subscriptions",
            Route::Licenses => "Licenses",
            Route::NotFound => "Page Not Found",
        }
    }

    /// Páginas dentro da moldura (exigem sessão).
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Clients
                | Route::Products
                | Route::Subscriptions
                | Route::Licenses
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(&'static str),
}

pub fn resolve(path: &str, authenticated: bool) -> Navigation {
    let route = Route::from_path(path);

    if route.is_protected() && !authenticated {
        return Navigation::Redirect(LOGIN_PATH);
    }
    if route == Route::Login && authenticated {
        return Navigation::Redirect(HOME_PATH);
    }

    Navigation::Render(route)
}

pub fn layout(active: Route) -> Layout {
    let sidebar = SIDEBAR
        .iter()
        .map(|&(title, url)| {
            let route = Route::from_path(url);
            SidebarItem {
                title,
                url,
                active: route != Route::NotFound && route == active,
            }
        })
        .collect();

    Layout {
        app_name: "CPS Manager",
        tagline: "Client Portal System",
        sidebar,
        logout_action: "/api/session/logout",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/clients/"), Route::Clients);
        assert_eq!(Route::from_path("/licenses"), Route::Licenses);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
        assert_eq!(Route::from_path("/clients/1"), Route::NotFound);
    }

    #[test]
    fn protected_pages_redirect_to_login() {
        for path in ["/", "/clients", "/products", "/subscriptions", "/licenses"] {
            assert_eq!(resolve(path, false), Navigation::Redirect("/login"), "{path}");
        }
        assert_eq!(resolve("/clients", true), Navigation::Render(Route::Clients));
    }

    #[test]
    fn login_page_redirects_home_once_authenticated() {
        assert_eq!(resolve("/login", false), Navigation::Render(Route::Login));
        assert_eq!(resolve("/login", true), Navigation::Redirect("/"));
    }

    #[test]
    fn public_and_unknown_pages_always_render() {
        for authenticated in [false, true] {
            assert_eq!(resolve("/register", authenticated), Navigation::Render(Route::Register));
            assert_eq!(resolve("/nope", authenticated), Navigation::Render(Route::NotFound));
        }
    }

    #[test]
    fn layout_marks_the_active_item() {
        let layout = layout(Route::Products);
        let titles: Vec<_> = layout.sidebar.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            ["Dashboard", "Subscriptions", "Products", "Clients", "Licenses", "Settings"]
        );

        let active: Vec<_> = layout.sidebar.iter().filter(|i| i.active).map(|i| i.url).collect();
        assert_eq!(active, ["/products"]);
    }

    #[test]
    fn settings_link_leads_to_the_not_found_page() {
        let layout = layout(Route::Dashboard);
        let settings = layout.sidebar.last().unwrap();
        assert_eq!((settings.title, settings.url), ("Settings", "/settings"));
        assert!(!settings.active);

        assert_eq!(resolve(settings.url, true), Navigation::Render(Route::NotFound));
    }
}
