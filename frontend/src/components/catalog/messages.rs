use crate::api::FetchError;

pub enum Msg<T> {
    Loaded(Result<Vec<T>, FetchError>),
    SearchChanged(String),
    CategoryChanged(String),
    SortChanged(String),
    ClearFilters,
    Retry,
}
