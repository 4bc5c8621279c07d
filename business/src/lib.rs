pub mod application {
    pub mod product {
        pub mod create;
        pub mod find;
        pub mod list;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod notification;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod find;
            pub mod list;
            pub mod update;
        }
    }
}
