// Domain layer - Position records and coordinate math
pub mod displacement;
pub mod geodesy;
pub mod map_view;
pub mod position;
pub mod receiver;
