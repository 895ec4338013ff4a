pub mod routes;

pub mod index {
    pub mod index_handlers;
}

pub mod users {
    pub mod users_handlers;
    pub mod users_models;

    #[cfg(test)]
    mod users_tests;
}
