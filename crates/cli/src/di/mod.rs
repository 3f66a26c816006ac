mod lookup;

pub use lookup::build_lookup_use_case;
