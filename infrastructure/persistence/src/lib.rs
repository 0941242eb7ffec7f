pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod supplier {
    pub mod entity;
    pub mod repository;
}
