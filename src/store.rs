use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::User;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("user {0} already exists")]
    AlreadyExists(i64),
}

// -- upsert 的结果: 新建或覆盖
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// 进程内的用户映射 -- id 到用户记录，读写锁保护
///
/// 克隆得到的句柄共享同一份数据。
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait UserExt {
    async fn list_users(&self) -> Vec<User>;

    async fn get_user(&self, id: i64) -> Option<User>;

    async fn create_user(&self, user: User) -> Result<User, StoreError>;

    async fn upsert_user(&self, id: i64, user: User) -> Upsert;

    async fn delete_user(&self, id: i64) -> Option<User>;
}

#[async_trait]
impl UserExt for UserStore {
    async fn list_users(&self) -> Vec<User> {
        let users = self.users.read().await;
        users.values().cloned().collect()
    }

    async fn get_user(&self, id: i64) -> Option<User> {
        let users = self.users.read().await;
        users.get(&id).cloned()
    }

    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        // -- 检查与插入在同一把写锁内完成
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(StoreError::AlreadyExists(user.id));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn upsert_user(&self, id: i64, user: User) -> Upsert {
        // -- 以路径 id 为键，记录本身原样保存
        let mut users = self.users.write().await;
        match users.insert(id, user) {
            Some(_) => Upsert::Updated,
            None => Upsert::Created,
        }
    }

    async fn delete_user(&self, id: i64) -> Option<User> {
        let mut users = self.users.write().await;
        users.remove(&id)
    }
}
