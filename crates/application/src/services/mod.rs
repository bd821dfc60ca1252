mod zone_walker;

pub use zone_walker::ZoneWalker;
