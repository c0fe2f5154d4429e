//! The fixed tile-type table. Loaded once, never mutated.

use serde::Serialize;

/// One matchable symbol. `color` and `text` are the UI token pair the
/// frontend renders the tile with; `tile_bg` overrides the default
/// white tile background for dark logo artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileType {
    pub id: u8,
    pub symbol: &'static str,
    pub color: &'static str,
    pub text: &'static str,
    pub image: Option<&'static str>,
    pub tile_bg: Option<&'static str>,
}

pub const CATALOG: [TileType; 20] = [
    TileType { id: 1, symbol: "💎", color: "bg-cyan-100", text: "text-cyan-500", image: Some("/images/gem.png"), tile_bg: None },
    TileType { id: 2, symbol: "😊", color: "bg-purple-100", text: "text-purple-500", image: Some("/images/smile.png"), tile_bg: None },
    TileType { id: 3, symbol: "⭐", color: "bg-yellow-50", text: "text-yellow-500", image: Some("/images/star.png"), tile_bg: None },
    TileType { id: 4, symbol: "🔵", color: "bg-blue-100", text: "text-blue-500", image: Some("/images/orb.png"), tile_bg: Some("#101010") },
    TileType { id: 5, symbol: "❤️", color: "bg-red-50", text: "text-red-500", image: Some("/images/heart.png"), tile_bg: None },
    TileType { id: 6, symbol: "🍪", color: "bg-orange-100", text: "text-orange-500", image: Some("/images/cookie.png"), tile_bg: None },
    TileType { id: 7, symbol: "🌟", color: "bg-pink-100", text: "text-pink-500", image: Some("/images/sparkle.png"), tile_bg: None },
    TileType { id: 8, symbol: "🛒", color: "bg-slate-100", text: "text-slate-500", image: Some("/images/cart.png"), tile_bg: None },
    TileType { id: 9, symbol: "💪", color: "bg-emerald-100", text: "text-emerald-500", image: Some("/images/flex.png"), tile_bg: None },
    TileType { id: 10, symbol: "📦", color: "bg-amber-100", text: "text-amber-500", image: Some("/images/parcel.png"), tile_bg: None },
    TileType { id: 11, symbol: "👗", color: "bg-rose-100", text: "text-rose-500", image: Some("/images/dress.png"), tile_bg: None },
    TileType { id: 12, symbol: "🛍️", color: "bg-green-100", text: "text-green-500", image: Some("/images/bags.png"), tile_bg: None },
    TileType { id: 13, symbol: "🍔", color: "bg-orange-100", text: "text-orange-600", image: Some("/images/burger.png"), tile_bg: Some("#450f41") },
    TileType { id: 14, symbol: "📱", color: "bg-red-100", text: "text-red-600", image: Some("/images/phone.png"), tile_bg: None },
    TileType { id: 15, symbol: "🏪", color: "bg-sky-100", text: "text-sky-600", image: Some("/images/store.png"), tile_bg: None },
    TileType { id: 16, symbol: "👟", color: "bg-zinc-100", text: "text-zinc-600", image: Some("/images/sneaker.png"), tile_bg: None },
    TileType { id: 17, symbol: "🔌", color: "bg-indigo-100", text: "text-indigo-600", image: Some("/images/plug.png"), tile_bg: None },
    TileType { id: 18, symbol: "🌸", color: "bg-pink-50", text: "text-pink-600", image: Some("/images/blossom.png"), tile_bg: None },
    TileType { id: 19, symbol: "💄", color: "bg-rose-50", text: "text-rose-600", image: Some("/images/lipstick.png"), tile_bg: None },
    TileType { id: 20, symbol: "✨", color: "bg-amber-50", text: "text-amber-600", image: Some("/images/shine.png"), tile_bg: None },
];

/// Look up a catalog entry by id. Ids are 1-based and dense, so this
/// is an index with a bounds check.
pub fn tile_type(id: u8) -> Option<&'static TileType> {
    if id == 0 {
        return None;
    }
    CATALOG.get(usize::from(id) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_dense_and_one_based() {
        for (index, entry) in CATALOG.iter().enumerate() {
            assert_eq!(usize::from(entry.id), index + 1);
        }
    }

    #[test]
    fn lookup_round_trips_every_id() {
        for entry in &CATALOG {
            assert_eq!(tile_type(entry.id).map(|t| t.id), Some(entry.id));
        }
        assert!(tile_type(0).is_none());
        assert!(tile_type(21).is_none());
    }
}
