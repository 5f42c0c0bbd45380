//! The submission pipeline: validate, notify, acknowledge.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ContactConfig;
use crate::error::{ContactError, ContactResult, DeliveryStage};
use crate::mailer::Mailer;
use crate::message::{render_acknowledgement, render_notification, OutboundEmail};
use crate::submission::ContactPayload;

/// Provider ids of both emails sent for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub notification_id: String,
    pub acknowledgement_id: String,
}

/// Stateless contact relay.
///
/// Cheap to clone; every clone shares the same mailer.
#[derive(Clone)]
pub struct ContactRelay {
    config: Arc<ContactConfig>,
    mailer: Arc<dyn Mailer>,
}

impl std::fmt::Debug for ContactRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactRelay")
            .field("config", &self.config)
            .field("mailer", &self.mailer.provider_name())
            .finish()
    }
}

impl ContactRelay {
    pub fn new(config: ContactConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Validates `payload` and sends the notification, then the acknowledgement.
    ///
    /// Validation failures return before any email is sent. The two sends are
    /// sequential; if the notification fails the acknowledgement is not attempted.
    /// A failed acknowledgement does not undo the notification.
    pub async fn submit(&self, payload: ContactPayload) -> ContactResult<Receipt> {
        let submission = match payload.validate() {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Rejected contact submission: {e}");
                return Err(e);
            }
        };

        info!(
            "Contact submission from {:?} ({} chars) via {}",
            submission.email,
            submission.body.chars().count(),
            self.mailer.provider_name()
        );

        let notification = render_notification(&self.config, &submission);
        let notification_id = self
            .send_stage(DeliveryStage::Notification, &notification)
            .await?;

        let acknowledgement = render_acknowledgement(&self.config, &submission);
        let acknowledgement_id = self
            .send_stage(DeliveryStage::Acknowledgement, &acknowledgement)
            .await?;

        info!("Contact submission relayed: notification={notification_id} ack={acknowledgement_id}");

        Ok(Receipt {
            notification_id,
            acknowledgement_id,
        })
    }

    async fn send_stage(
        &self,
        stage: DeliveryStage,
        email: &OutboundEmail,
    ) -> ContactResult<String> {
        match self.mailer.send(email).await {
            Ok(sent) => Ok(sent.id),
            Err(source) => {
                error!(
                    "Contact {stage} email failed (operator notified: {}): {source}",
                    stage.operator_notified()
                );
                Err(ContactError::Delivery { stage, source })
            }
        }
    }
}
