pub mod error;

pub mod action {
    pub mod cli;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod batch;
    pub mod conversion;
}

pub mod service {
    pub mod codec;
    pub mod convert;
    pub mod file;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod utils {
    pub mod utils;
}
