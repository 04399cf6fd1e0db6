use anyhow::Result;

use crate::cli::{CategoryAction, Cli, Commands, TaskAction, UserAction};
use crate::client::ApiClient;
use crate::render;
use taskboard_api::Settings;
use taskboard_core::{NewCategory, NewTask, NewUser, TaskPatch};

pub async fn execute(cli: Cli) -> Result<()> {
    let client = ApiClient::new(cli.api_url);

    match cli.command {
        Commands::Serve { port } => {
            let mut settings = Settings::from_env()?;
            if let Some(port) = port {
                settings = settings.with_port(port);
            }

            println!("Starting API server on {}...", settings.addr());
            taskboard_api::serve(settings).await?;
        }

        Commands::Users { action } => users(&client, action).await?,

        Commands::Tasks { action } => tasks(&client, action).await?,

        Commands::Categories { action } => categories(&client, action).await?,

        Commands::Stats => {
            let stats = client.stats().await?;
            println!("Taskboard Statistics\n");
            println!("  Users: {}", stats["users"]);
            println!("  Categories: {}", stats["categories"]);
            println!("  Tasks: {}", stats["tasks"]);

            if let Some(by_status) = stats["tasksByStatus"].as_object() {
                for (status, count) in by_status {
                    println!("    {}: {}", status, count);
                }
            }
        }
    }

    Ok(())
}

async fn users(client: &ApiClient, action: UserAction) -> Result<()> {
    match action {
        UserAction::List => {
            let users = client.list_users().await?;
            println!("{}", render::render_users(&users));
        }
        UserAction::Create { name, email } => {
            let user = client
                .create_user(&NewUser {
                    name: Some(name),
                    email: Some(email),
                })
                .await?;
            println!("✓ User created: {}", user.id);
        }
        UserAction::Delete { id } => {
            println!("✓ {}", client.delete_user(&id).await?);
        }
    }
    Ok(())
}

async fn tasks(client: &ApiClient, action: TaskAction) -> Result<()> {
    match action {
        TaskAction::List => {
            let tasks = client.list_tasks().await?;
            println!("{}", render::render_tasks(&tasks));
        }
        TaskAction::Create {
            title,
            description,
            user,
            category,
            priority,
        } => {
            let task = client
                .create_task(&NewTask {
                    title: Some(title),
                    description: Some(description),
                    user_id: Some(user),
                    category_id: Some(category),
                    priority,
                    status: None,
                })
                .await?;
            println!("✓ Task created: {}", task.id);
            println!("  Title: {}", task.title);
            println!("  Priority: {}", task.priority.as_str());
        }
        TaskAction::Update {
            id,
            title,
            description,
            status,
            priority,
        } => {
            let task = client
                .update_task(
                    &id,
                    &TaskPatch {
                        title,
                        description,
                        status,
                        priority,
                        ..Default::default()
                    },
                )
                .await?;
            println!("✓ Task updated: {}", task.id);
            println!("  Status: {}", task.status.as_str());
        }
        TaskAction::Delete { id } => {
            println!("✓ {}", client.delete_task(&id).await?);
        }
    }
    Ok(())
}

async fn categories(client: &ApiClient, action: CategoryAction) -> Result<()> {
    match action {
        CategoryAction::List => {
            let categories = client.list_categories().await?;
            println!("{}", render::render_categories(&categories));
        }
        CategoryAction::Create { name } => {
            let category = client.create_category(&NewCategory { name: Some(name) }).await?;
            println!("✓ Category created: {} ({})", category.name, category.id);
        }
    }
    Ok(())
}
