use crate::model::Album;

/// Demo catalog served when no fixture file is configured
pub fn fixture_albums() -> Vec<Album> {
    vec![
        Album::new(1, "You, Me and an App Id", "Daprize", 10.99, "Pop"),
        Album::new(2, "Seven Revision Army", "The Blue-Green Stripes", 13.99, "Rock"),
        Album::new(3, "Scale It Up", "KEDA Club", 13.99, "Electronic"),
        Album::new(4, "Lost in Translation", "MegaDNS", 12.99, "Pop"),
        Album::new(5, "Lock Down Your Love", "V is for VNET", 12.99, "Rock"),
        Album::new(6, "Sweet Container O' Mine", "Guns N Probeses", 14.99, "Rock"),
    ]
}
