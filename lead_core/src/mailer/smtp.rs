//! SMTP delivery for operator notifications

use super::{compose_notification, notification_subject, Notifier};
use crate::config::MailConfig;
use crate::error::{AppError, Result};
use crate::models::Submission;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    operator: Mailbox,
    sender: Mailbox,
    send_timeout: Duration,
}

impl SmtpNotifier {
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        let builder = if config.username.is_empty() {
            // Unauthenticated relay, e.g. a local MTA.
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| AppError::Notification(e.to_string()))?
                .credentials(Credentials::new(
                    config.username.clone(),
                    config.password.clone(),
                ))
        };

        let transport = builder.port(config.smtp_port).build();

        let operator = config
            .operator_email
            .parse::<Mailbox>()
            .map_err(|e| AppError::Notification(format!("invalid operator address: {}", e)))?;
        let sender = config
            .sender_email
            .parse::<Mailbox>()
            .map_err(|e| AppError::Notification(format!("invalid sender address: {}", e)))?;

        Ok(Self {
            transport,
            operator,
            sender,
            send_timeout: Duration::from_secs(config.send_timeout_seconds),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, submission: &Submission) -> Result<()> {
        let reply_to = submission
            .email
            .parse::<Mailbox>()
            .map_err(|e| AppError::Notification(format!("invalid reply-to address: {}", e)))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .reply_to(reply_to)
            .to(self.operator.clone())
            .subject(notification_subject(submission))
            .header(ContentType::TEXT_PLAIN)
            .body(compose_notification(submission))
            .map_err(|e| AppError::Notification(e.to_string()))?;

        // Expiry is a non-fatal notification failure, same as a rejection.
        match tokio::time::timeout(self.send_timeout, self.transport.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(AppError::Notification(e.to_string())),
            Err(_) => Err(AppError::Notification(
                "notification send timed out".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_from_config_with_defaults() {
        let config = MailConfig::default();
        assert!(SmtpNotifier::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_operator_address_rejected() {
        let config = MailConfig {
            operator_email: "not-an-address".to_string(),
            ..MailConfig::default()
        };
        assert!(SmtpNotifier::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_unresponsive_server_hits_send_timeout() {
        // A listener that accepts the connection but never sends the SMTP
        // greeting, so the client would wait until its own (much longer)
        // transport timeout.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let _server = tokio::spawn(async move {
            if let Ok((socket, _)) = listener.accept().await {
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(socket);
            }
        });

        let config = MailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: port,
            send_timeout_seconds: 1,
            ..MailConfig::default()
        };
        let notifier = SmtpNotifier::from_config(&config).unwrap();

        let fields: HashMap<String, String> = [("name", "Jo"), ("email", "jo@x.com"), ("phone", "555-1111")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let submission = Submission::from_fields(&fields);

        let start = std::time::Instant::now();
        let result = notifier.notify(&submission).await;

        assert!(matches!(result, Err(AppError::Notification(_))));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
