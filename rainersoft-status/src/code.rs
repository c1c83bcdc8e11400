//! The closed set of status codes and their labels.

use crate::tone::{BadgeVariant, StatusTone};
use rainersoft_types::{Error, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known status code.
///
/// Serializes as the upper-case wire form (`IN_PROGRESS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Draft,
    Published,
    Archived,
    Scheduled,
    Active,
    Inactive,
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
    Deleted,
    Suspended,
    InProgress,
    Failed,
    Success,
    Error,
    Processing,
    Expired,
    Paid,
    Refunded,
}

impl StatusCode {
    /// Every status code, in declaration order.
    pub const ALL: [StatusCode; 21] = [
        Self::Draft,
        Self::Published,
        Self::Archived,
        Self::Scheduled,
        Self::Active,
        Self::Inactive,
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Completed,
        Self::Cancelled,
        Self::Deleted,
        Self::Suspended,
        Self::InProgress,
        Self::Failed,
        Self::Success,
        Self::Error,
        Self::Processing,
        Self::Expired,
        Self::Paid,
        Self::Refunded,
    ];

    /// Returns the canonical upper-case code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
            Self::Scheduled => "SCHEDULED",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Deleted => "DELETED",
            Self::Suspended => "SUSPENDED",
            Self::InProgress => "IN_PROGRESS",
            Self::Failed => "FAILED",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Processing => "PROCESSING",
            Self::Expired => "EXPIRED",
            Self::Paid => "PAID",
            Self::Refunded => "REFUNDED",
        }
    }

    /// Returns the display label in `locale`.
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        let [pt, en, es] = self.labels();
        match locale {
            Locale::PtBr => pt,
            Locale::EnUs => en,
            Locale::EsEs => es,
        }
    }

    const fn labels(&self) -> [&'static str; 3] {
        match self {
            Self::Draft => ["Rascunho", "Draft", "Borrador"],
            Self::Published => ["Publicado", "Published", "Publicado"],
            Self::Archived => ["Arquivado", "Archived", "Archivado"],
            Self::Scheduled => ["Agendado", "Scheduled", "Programado"],
            Self::Active => ["Ativo", "Active", "Activo"],
            Self::Inactive => ["Inativo", "Inactive", "Inactivo"],
            Self::Pending => ["Pendente", "Pending", "Pendiente"],
            Self::Approved => ["Aprovado", "Approved", "Aprobado"],
            Self::Rejected => ["Rejeitado", "Rejected", "Rechazado"],
            Self::Completed => ["Concluído", "Completed", "Completado"],
            Self::Cancelled => ["Cancelado", "Cancelled", "Cancelado"],
            Self::Deleted => ["Excluído", "Deleted", "Eliminado"],
            Self::Suspended => ["Suspenso", "Suspended", "Suspendido"],
            Self::InProgress => ["Em andamento", "In progress", "En curso"],
            Self::Failed => ["Falhou", "Failed", "Fallido"],
            Self::Success => ["Sucesso", "Success", "Éxito"],
            Self::Error => ["Erro", "Error", "Error"],
            Self::Processing => ["Processando", "Processing", "Procesando"],
            Self::Expired => ["Expirado", "Expired", "Caducado"],
            Self::Paid => ["Pago", "Paid", "Pagado"],
            Self::Refunded => ["Reembolsado", "Refunded", "Reembolsado"],
        }
    }

    /// Semantic tone used for coloring.
    #[must_use]
    pub const fn tone(&self) -> StatusTone {
        match self {
            Self::Published
            | Self::Active
            | Self::Approved
            | Self::Completed
            | Self::Success
            | Self::Paid => StatusTone::Success,
            Self::Rejected
            | Self::Cancelled
            | Self::Deleted
            | Self::Suspended
            | Self::Failed
            | Self::Error
            | Self::Expired => StatusTone::Destructive,
            Self::Draft
            | Self::Scheduled
            | Self::Pending
            | Self::InProgress
            | Self::Processing => StatusTone::Secondary,
            Self::Archived | Self::Inactive | Self::Refunded => StatusTone::Neutral,
        }
    }

    /// Badge variant for component libraries.
    #[must_use]
    pub const fn variant(&self) -> BadgeVariant {
        match self.tone() {
            StatusTone::Success => BadgeVariant::Default,
            StatusTone::Destructive => BadgeVariant::Destructive,
            StatusTone::Secondary => BadgeVariant::Secondary,
            StatusTone::Neutral => BadgeVariant::Outline,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = Error;

    /// Case-insensitive; `-` and spaces are read as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}
