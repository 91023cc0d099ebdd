//! Storefront page routes.
//!
//! Maps browser paths to the view that renders them. Rendering itself belongs
//! to whatever front end consumes this table.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Characters that cannot appear raw inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    ProductDetail { id: String },
    Orders,
    Chat,
    AdminOrders,
    AdminProducts,
}

impl View {
    pub fn path(&self) -> String {
        match self {
            View::Home => "/".to_string(),
            View::ProductDetail { id } => {
                format!("/product/{}", utf8_percent_encode(id, SEGMENT))
            }
            View::Orders => "/orders".to_string(),
            View::Chat => "/chat".to_string(),
            View::AdminOrders => "/admin/orders".to_string(),
            View::AdminProducts => "/admin/products".to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    View(View),
    Redirect(View),
}

impl Resolved {
    /// The view finally shown, following a redirect if there is one.
    pub fn view(&self) -> &View {
        match self {
            Resolved::View(view) | Resolved::Redirect(view) => view,
        }
    }
}

/// Resolves a browser path. Query strings and fragments are ignored, and the
/// product id is percent-decoded.
pub fn resolve(path: &str) -> Option<Resolved> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let resolved = match segments.as_slice() {
        [] => Resolved::View(View::Home),
        ["product", id] => Resolved::View(View::ProductDetail {
            id: percent_decode_str(id).decode_utf8_lossy().into_owned(),
        }),
        ["orders"] => Resolved::View(View::Orders),
        ["chat"] => Resolved::View(View::Chat),
        ["admin"] => Resolved::Redirect(View::AdminOrders),
        ["admin", "orders"] => Resolved::View(View::AdminOrders),
        ["admin", "products"] => Resolved::View(View::AdminProducts),
        _ => return None,
    };
    Some(resolved)
}
