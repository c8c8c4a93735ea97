// Pure decision function for employee creation.
//
// Employees carry no uniqueness or format rule, so the decision always accepts.

use crate::modules::records::core::employee::Employee;
use crate::modules::records::use_cases::create_employee::command::CreateEmployee;

pub fn decide_create_employee(employee_id: String, command: CreateEmployee) -> Employee {
    Employee {
        id: employee_id,
        first_name: command.first_name,
        last_name: command.last_name,
        email: command.email,
    }
}

#[cfg(test)]
mod create_employee_decide_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ada", "Lovelace", "ada@example.com")]
    #[case("", "", "")]
    #[case("Ada", "Lovelace", "not-an-email")]
    fn it_should_always_accept_the_employee(
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] email: &str,
    ) {
        let employee = decide_create_employee(
            "emp-1".into(),
            CreateEmployee {
                first_name: first_name.into(),
                last_name: last_name.into(),
                email: email.into(),
            },
        );

        assert_eq!(employee.id, "emp-1");
        assert_eq!(employee.first_name, first_name);
        assert_eq!(employee.last_name, last_name);
        assert_eq!(employee.email, email);
    }
}
