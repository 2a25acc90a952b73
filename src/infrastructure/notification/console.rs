//! Console notification adapter

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Prints notifications to stdout, one block per notification
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn render(title: &str, message: &str, icon: NotificationIcon) -> String {
        let title = match icon {
            NotificationIcon::Translation => title.bold().to_string(),
            NotificationIcon::Warning => title.yellow().to_string(),
            NotificationIcon::Error => title.red().bold().to_string(),
        };

        let mut rendered = title;
        for line in message.lines() {
            rendered.push_str("\n  ");
            rendered.push_str(line);
        }
        rendered
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        // A single println keeps concurrent blocks from interleaving
        println!("{}", Self::render(title, message, icon));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_indents_each_message_line() {
        colored::control::set_override(false);
        let rendered = ConsoleNotifier::render(
            "hello",
            "libretranslate: timeout\nmymemory: 403",
            NotificationIcon::Warning,
        );
        assert_eq!(rendered, "hello\n  libretranslate: timeout\n  mymemory: 403");
    }
}
