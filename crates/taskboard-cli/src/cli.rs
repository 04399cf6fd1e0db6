use clap::{Parser, Subcommand};

use taskboard_core::{Priority, TaskStatus};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard - users, tasks and categories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of a running Taskboard API
    #[arg(
        long,
        env = "TASKBOARD_API_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start API server
    Serve {
        /// Port to listen on (defaults to API_PORT or 3000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Show statistics
    Stats,
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List all users
    List,

    /// Create a user
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Delete a user by ID
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List all tasks
    List,

    /// Create a task
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Owning user ID
        #[arg(long)]
        user: String,

        /// Category ID
        #[arg(long)]
        category: String,

        /// LOW, MEDIUM or HIGH
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// Update fields of a task
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// PENDING, IN_PROGRESS or DONE
        #[arg(long)]
        status: Option<TaskStatus>,

        #[arg(long)]
        priority: Option<Priority>,
    },

    /// Delete a task by ID
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List all categories
    List,

    /// Create a category
    Create {
        #[arg(long)]
        name: String,
    },
}
