//! Create the Spring Boot product-catalog task list in `backlog`.

fn main() {
    taskseed::cli::seed_builtin("spring-boot")
}
