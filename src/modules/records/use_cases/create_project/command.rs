// Command data type for creating a project.
//
// Independent of transport; the inbound adapters build it from their own request shapes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProject {
    pub name: String,
    pub client: String,
}
