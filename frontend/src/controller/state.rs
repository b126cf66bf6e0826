//! 页面状态模块
//!
//! 纯数据 + 同步状态迁移，不涉及网络与 DOM：
//! - 数据的持有（列表、下拉选项、草稿、校验错误）
//! - 加载代次（丢弃过期响应）
//! - 草稿到请求载荷的转换

use std::collections::BTreeMap;

use imdb_admin_shared::{EntityId, HasId};

use super::{EntityForm, FormPage};
use crate::error::ApiError;

/// 字段级校验错误，键为字段名（与线路上的字段名一致）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// 字段缺失时记录错误
    pub fn require(&mut self, field: &'static str, present: bool, message: &str) {
        if !present {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// 表单草稿
///
/// 新建与编辑互斥：同一时刻最多只有一个草稿处于活动状态。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Draft<F> {
    /// 无草稿，表单显示空白的新建视图
    #[default]
    Idle,
    Creating(F),
    Editing { id: EntityId, form: F },
}

impl<F: Clone + Default> Draft<F> {
    pub fn is_editing(&self) -> bool {
        matches!(self, Draft::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<EntityId> {
        match self {
            Draft::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// 表单当前显示的内容
    pub fn current_form(&self) -> F {
        match self {
            Draft::Idle => F::default(),
            Draft::Creating(form) | Draft::Editing { form, .. } => form.clone(),
        }
    }

    /// 活动草稿的可变引用；空闲时先开启一个新建草稿
    pub fn form_mut(&mut self) -> &mut F {
        if matches!(self, Draft::Idle) {
            *self = Draft::Creating(F::default());
        }
        match self {
            Draft::Creating(form) | Draft::Editing { form, .. } => form,
            Draft::Idle => unreachable!("idle draft was replaced above"),
        }
    }
}

/// 一次加载的代次凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// 表单-列表页面状态
pub struct PageState<P: FormPage> {
    items: Vec<P::Entity>,
    lookups: P::Lookups,
    draft: Draft<P::Form>,
    loading: bool,
    field_errors: FieldErrors,
    generation: u64,
}

impl<P: FormPage> Default for PageState<P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            lookups: P::Lookups::default(),
            draft: Draft::Idle,
            loading: false,
            field_errors: FieldErrors::new(),
            generation: 0,
        }
    }
}

impl<P: FormPage> PageState<P> {
    pub fn items(&self) -> &[P::Entity] {
        &self.items
    }

    pub fn lookups(&self) -> &P::Lookups {
        &self.lookups
    }

    pub fn draft(&self) -> &Draft<P::Form> {
        &self.draft
    }

    pub fn current_form(&self) -> P::Form {
        self.draft.current_form()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors.get(field).map(str::to_owned)
    }

    // --- 加载 ---

    /// 开始一次加载，之前发出的加载全部过期
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// 应用加载结果
    ///
    /// 过期凭据的结果被丢弃并返回 false。失败时保留原列表。
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(Vec<P::Entity>, P::Lookups), ApiError>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.loading = false;
        if let Ok((items, lookups)) = result {
            self.items = items;
            self.lookups = lookups;
        }
        true
    }

    // --- 草稿 ---

    pub fn edit_form(&mut self, f: impl FnOnce(&mut P::Form)) {
        f(self.draft.form_mut());
    }

    /// 把列表中的实体整体复制到编辑草稿，替换任何新建草稿
    pub fn select_for_edit(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.items.iter().find(|e| e.id() == id) else {
            return false;
        };
        self.draft = Draft::Editing {
            id,
            form: P::Form::from_entity(entity),
        };
        self.field_errors = FieldErrors::new();
        true
    }

    pub fn cancel_edit(&mut self) {
        if self.draft.is_editing() {
            self.draft = Draft::Idle;
        }
        self.field_errors = FieldErrors::new();
    }

    // --- 提交 ---

    /// 校验新建草稿并生成载荷；校验失败时记录字段错误
    pub fn prepare_create(&mut self) -> Option<P::Create> {
        if self.draft.is_editing() {
            return None;
        }
        let form = self.draft.current_form();
        self.accept(form.to_create())
    }

    /// 校验编辑草稿并生成载荷
    pub fn prepare_update(&mut self) -> Option<(EntityId, P::Update)> {
        let Draft::Editing { id, form } = &self.draft else {
            return None;
        };
        let id = *id;
        let payload = form.to_update();
        self.accept(payload).map(|p| (id, p))
    }

    fn accept<Q>(&mut self, payload: Result<Q, FieldErrors>) -> Option<Q> {
        match payload {
            Ok(payload) => {
                self.loading = true;
                Some(payload)
            }
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }

    pub fn complete_create(&mut self) {
        if matches!(self.draft, Draft::Creating(_)) {
            self.draft = Draft::Idle;
        }
        self.field_errors = FieldErrors::new();
    }

    pub fn complete_update(&mut self, id: EntityId) {
        if self.draft.editing_id() == Some(id) {
            self.draft = Draft::Idle;
        }
        self.field_errors = FieldErrors::new();
    }

    pub fn fail_submit(&mut self) {
        self.loading = false;
    }

    pub fn begin_delete(&mut self) {
        self.loading = true;
    }
}
