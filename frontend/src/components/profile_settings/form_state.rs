//! 资料表单状态
//!
//! 把零散的 signal 整合为 `ProfileFormState`，负责：
//! - 以缓存的用户资料预填
//! - 转换为 `ProfileForm`
//! - 保存成功后清空密码

use leptos::prelude::*;
use localaudit::flows::profile::ProfileForm;
use localaudit_shared::UserProfile;

/// 使用 `RwSignal`，可以作为 Props 在组件间复制传递。
#[derive(Clone, Copy)]
pub struct ProfileFormState {
    pub nom: RwSignal<String>,
    pub prenom: RwSignal<String>,
    pub email: RwSignal<String>,
    pub current_password: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl ProfileFormState {
    pub fn new(user: Option<&UserProfile>) -> Self {
        let form = ProfileForm::prefilled(user);
        Self {
            nom: RwSignal::new(form.nom),
            prenom: RwSignal::new(form.prenom),
            email: RwSignal::new(form.email),
            current_password: RwSignal::new(String::new()),
            new_password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    pub fn to_form(&self) -> ProfileForm {
        ProfileForm {
            nom: self.nom.get_untracked(),
            prenom: self.prenom.get_untracked(),
            email: self.email.get_untracked(),
            current_password: self.current_password.get_untracked(),
            new_password: self.new_password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn clear_passwords(&self) {
        self.current_password.set(String::new());
        self.new_password.set(String::new());
        self.confirm_password.set(String::new());
    }
}
