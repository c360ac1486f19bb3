use rollbook_core::errors::ErrorResponse;
use rollbook_core::MessageResponse;
use rollbook_models::{
    AuthenticatedIdentity, LoginRequest, LoginResponse, RegisterStudentDto, RegisterTeacherDto,
    Role, Student, Teacher,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::register_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_student_by_email,
        crate::modules::teachers::controller::register_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::auth::controller::login,
        crate::modules::health::controller::health,
    ),
    components(
        schemas(
            Role,
            Student,
            Teacher,
            RegisterStudentDto,
            RegisterTeacherDto,
            LoginRequest,
            LoginResponse,
            AuthenticatedIdentity,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student registration and directory"),
        (name = "Teachers", description = "Teacher registration and directory"),
        (name = "Authentication", description = "Role-based login"),
        (name = "Health", description = "Liveness probe"),
    ),
    info(
        title = "Rollbook API",
        version = "0.1.0",
        description = "Student and teacher registration, directory lookups and login",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/student/register",
            "/api/teacher/register",
            "/api/students",
            "/api/students/{id}",
            "/api/students/email/{email}",
            "/api/teachers",
            "/api/teachers/{id}",
            "/api/login",
            "/api/health",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
