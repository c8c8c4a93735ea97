// Command data type for creating an employee.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
