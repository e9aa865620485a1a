use actix_web::HttpResponse;

use crate::actions::Effect;
use crate::cache::RouteCache;
use crate::models::invoice::InvoiceListItem;

/// Listing data shared across requests, keyed by route.
pub type ListingCache = RouteCache<Vec<InvoiceListItem>>;

/// Apply an action's effects and build the response. Without a `Redirect`
/// effect the client is sent to `fallback`.
pub fn deliver(effects: &[Effect], cache: &ListingCache, fallback: &str) -> HttpResponse {
    let mut location = fallback.to_string();
    for effect in effects {
        match effect {
            Effect::Invalidate(route) => {
                if cache.invalidate(route) {
                    log::debug!("Invalidated cached data for {route}");
                }
            }
            Effect::Redirect(route) => location = route.clone(),
        }
    }
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
