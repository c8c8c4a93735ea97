use crate::modules::records::application::record_service::RecordService;
use crate::modules::records::core::project::Project;

impl RecordService {
    /// Every project, in the order they were created.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.read(|dataset| dataset.projects.clone()).await
    }
}

#[cfg(test)]
mod list_projects_handler_tests {
    use crate::test_support::fixtures::commands::create_project::CreateProjectBuilder;
    use crate::test_support::fixtures::services::{BeforeEachReturn, before_each};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_list_nothing_for_a_fresh_store(before_each: BeforeEachReturn) {
        let (_store, _clock, service) = before_each;
        assert!(service.list_projects().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_projects_in_insertion_order(before_each: BeforeEachReturn) {
        let (_store, _clock, service) = before_each;
        let mut created = Vec::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            created.push(
                service
                    .create_project(CreateProjectBuilder::new().name(name).build())
                    .await
                    .expect("create_project failed"),
            );
        }

        assert_eq!(service.list_projects().await, created);
    }
}
