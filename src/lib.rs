pub mod prelude;
pub mod roots{
    pub mod approximation_error;
    pub mod babylonian_sqrt;
    pub mod binary_search_sqrt;
    pub mod newton_sqrt;
    pub mod recursive_sqrt;
    pub mod root_result;
}
pub mod squares{
    pub mod square_cache;
    pub mod square_progression;
}
