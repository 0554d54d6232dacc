//! Output formatting utilities

use crate::domain::Post;

/// Format the "Show All" listing
pub fn format_title_list(titles: &[&str]) -> String {
    if titles.is_empty() {
        return "No posts available.".to_string();
    }

    let mut output = String::from("All Posts:\n");
    for title in titles {
        output.push_str(&format!("- {}\n", title));
    }
    output
}

/// Format search hits as a list of titles
pub fn format_search_results(keyword: &str, posts: &[&Post]) -> String {
    if posts.is_empty() {
        return format!("No posts found matching '{}'.", keyword);
    }

    let mut output = format!("Posts matching '{}':\n", keyword);
    for post in posts {
        output.push_str(&format!("- {}\n", post.title));
    }
    output
}

pub fn created_message(title: &str) -> String {
    format!("Post '{}' created successfully.", title)
}

pub fn updated_message(title: &str) -> String {
    format!("Post '{}' updated successfully.", title)
}

pub fn deleted_message(title: &str) -> String {
    format!("Post '{}' deleted successfully.", title)
}
