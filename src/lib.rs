pub mod config;

pub mod domain {
    pub mod entities {
        pub mod course;
        pub mod exam;
        pub mod notice;
        pub mod record;
        pub mod view;
    }
}

pub mod usecase {
    pub mod ports {
        pub mod repo;
    }

    pub mod services {
        pub mod course_browser;
        pub mod exam_schedule;
        pub mod import_service;
        pub mod notice_board;
        pub mod query_service;
        pub mod view_engine;
    }
}

pub mod infra {
    pub mod import {
        pub mod csv;
        pub mod records;
        pub mod xlsx;
    }

    pub mod sqlite {
        pub mod queries;
        pub mod repo;
        pub mod schema;
    }
}

pub mod ui {
    pub mod pagination;
    pub mod table;
}

pub use crate::domain::entities::view::{DerivedView, PageResult, SortDirection, ViewParams};
pub use crate::usecase::services::view_engine::{
    clamp_page, compute_view, go_to_page, reset_page_on_param_change,
};
