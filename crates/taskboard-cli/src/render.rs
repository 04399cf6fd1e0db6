use taskboard_core::{Category, Task, User};

pub fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found".to_string();
    }

    users
        .iter()
        .map(|u| format!("{}  {} <{}>", u.id, u.name, u.email))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    tasks
        .iter()
        .map(|t| {
            format!(
                "{}  [{}] {} ({})",
                t.id,
                t.status.as_str(),
                t.title,
                t.priority.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One category name per line.
pub fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    categories
        .iter()
        .map(|c| format!("{}  {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}
