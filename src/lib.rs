pub mod shared {
    pub mod core {
        pub mod clock;
    }
}

pub mod modules {
    pub mod records {
        pub mod core {
            pub mod dataset;
            pub mod date_format;
            pub mod decision;
            pub mod employee;
            pub mod project;
            pub mod rules;
            pub mod time_entry;
        }
        pub mod application {
            pub mod errors;
            pub mod record_service;
        }
        pub mod use_cases {
            pub mod create_project {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_employee {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod register_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_employee {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_types;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod dataset_store;
                pub mod dataset_store_in_memory;
                pub mod dataset_store_json_file;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod commands {
            pub mod create_project;
            pub mod register_time_entry;
        }
        pub mod services;
    }
}
