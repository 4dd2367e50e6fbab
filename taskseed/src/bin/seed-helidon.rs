//! Create the Helidon product-catalog task list in `backlog`.

fn main() {
    taskseed::cli::seed_builtin("helidon")
}
