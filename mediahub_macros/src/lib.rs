mod model;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Model)]
// ============================================================================

/// Derive macro implementing `mediahub::Model` for a struct.
///
/// The collection name defaults to the snake_case struct name plus `s`
/// (`MediaItem` becomes `media_items`). Override it with an attribute:
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Model)]
/// #[model(collection = "watchlist")]
/// struct WatchlistEntry {
///     title: String,
/// }
/// ```
///
/// Ids are assigned by the store, so the struct carries no id field.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input)
}
