use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod date;
pub mod protocol;

pub use protocol::{ApiRequest, AuthMode, BodyEncoding, HttpMethod};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_PDF: &str = "application/pdf";

/// PDF 导出路由前缀，文件名作为最后一段路径拼接
pub const EXPORT_PDF_PATH: &str = "/api/export-pdf";

// =========================================================
// 用户 (Users)
// =========================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub prenom: Option<String>,
}

impl UserProfile {
    /// 仅凭邮箱构造用户，名字取 `@` 之前的部分
    pub fn from_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: email_local_part(email).to_string(),
            ..Default::default()
        }
    }

    /// 展示名：优先 name，其次邮箱
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// 头像首字母，缺省为 `U`
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }

    /// 将服务端返回的资料合并到当前资料上，空字段不覆盖
    pub fn merge(&mut self, update: UserProfile) {
        if update.id.is_some() {
            self.id = update.id;
        }
        if !update.email.trim().is_empty() {
            self.email = update.email;
        }
        if !update.name.trim().is_empty() {
            self.name = update.name;
        }
        if update.nom.is_some() {
            self.nom = update.nom;
        }
        if update.prenom.is_some() {
            self.prenom = update.prenom;
        }
        if self.name.trim().is_empty() {
            self.name = email_local_part(&self.email).to_string();
        }
    }
}

pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

// =========================================================
// 请求/响应载荷 (Payloads)
// =========================================================

/// `POST /api/token` 的表单字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRequest {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListAuditsRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: String,
    pub current_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// `GET /api/user/audits` 可能返回信封对象，也可能直接返回数组
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditList {
    Bare(Vec<AuditRecord>),
    Envelope {
        #[serde(default)]
        audits: Vec<AuditRecord>,
    },
}

impl AuditList {
    pub fn into_records(self) -> Vec<AuditRecord> {
        match self {
            AuditList::Bare(records) => records,
            AuditList::Envelope { audits } => audits,
        }
    }
}

// =========================================================
// 历史审计记录 (Audit history rows)
// =========================================================

/// 历史审计记录
///
/// 不同生产者的字段命名不一致（英文/法文同义词），
/// 因此保留原始 JSON，通过访问器按候选键读取。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditRecord(pub Value);

impl AuditRecord {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.first_str(&["name", "company"])
    }

    pub fn location(&self) -> Option<&str> {
        self.first_str(&["location"])
    }

    pub fn score(&self) -> Option<f64> {
        match self.0.get("score")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn date_raw(&self) -> Option<&str> {
        self.first_str(&["date", "created_at"])
    }

    pub fn pdf_url(&self) -> Option<&str> {
        self.first_str(&["pdf_url"])
    }

    /// 搜索用的拼接文本（小写）
    pub fn searchable_text(&self) -> String {
        ["name", "company", "location", "nom_entreprise"]
            .iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("Entreprise inconnue")
    }

    pub fn display_location(&self) -> &str {
        self.location().unwrap_or("Non spécifiée")
    }

    pub fn display_date(&self) -> String {
        self.date_raw()
            .and_then(date::format_fr_date)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// 分数为 0 或缺失时显示 `N/A`
    pub fn display_score(&self) -> String {
        match self.score() {
            Some(score) if score != 0.0 => format_number(score),
            _ => "N/A".to_string(),
        }
    }
}

/// 整数值不带小数点输出
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn audit_list_accepts_envelope_and_bare_array() {
        let envelope: AuditList =
            serde_json::from_value(json!({ "audits": [{ "id": 1 }], "total": 1 })).unwrap();
        assert_eq!(envelope.into_records().len(), 1);

        let bare: AuditList = serde_json::from_value(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
        assert_eq!(bare.into_records().len(), 2);

        let empty: AuditList = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(empty.into_records().is_empty());
    }

    #[test]
    fn audit_record_display_fallbacks() {
        let record = AuditRecord(json!({ "company": "Boulangerie", "score": 0 }));
        assert_eq!(record.display_name(), "Boulangerie");
        assert_eq!(record.display_location(), "Non spécifiée");
        assert_eq!(record.display_date(), "N/A");
        assert_eq!(record.display_score(), "N/A");

        let scored = AuditRecord(json!({ "name": "Acme", "score": 85, "created_at": "2024-03-05T10:00:00" }));
        assert_eq!(scored.display_score(), "85");
        assert_eq!(scored.display_date(), "05/03/2024");
    }

    #[test]
    fn audit_id_accepts_number_or_string() {
        assert_eq!(AuditRecord(json!({ "id": 42 })).id().as_deref(), Some("42"));
        assert_eq!(AuditRecord(json!({ "id": "a1b2" })).id().as_deref(), Some("a1b2"));
        assert_eq!(AuditRecord(json!({ "id": "" })).id(), None);
        assert_eq!(AuditRecord(json!({})).id(), None);
    }

    #[test]
    fn searchable_text_covers_french_company_field() {
        let record = AuditRecord(json!({ "nom_entreprise": "Chez Marcel", "location": "Lyon" }));
        assert!(record.searchable_text().contains("chez marcel"));
        assert!(record.searchable_text().contains("lyon"));
    }

    #[test]
    fn merge_keeps_existing_fields_when_update_is_blank() {
        let mut user = UserProfile::from_email("jane@example.com");
        user.merge(UserProfile {
            nom: Some("Doe".into()),
            ..Default::default()
        });
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "jane");
        assert_eq!(user.nom.as_deref(), Some("Doe"));
        assert_eq!(user.initial(), 'J');
    }
}
