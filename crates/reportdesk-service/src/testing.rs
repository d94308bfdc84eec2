//! In-memory gateway fakes for service tests.
//!
//! Each fake mirrors the ordering and read-state semantics of the real
//! Postgres repositories: listings come back newest first, `mark_read`
//! reports success for any existing row, and `mark_all_read_for_user`
//! reports whether anything actually changed.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use reportdesk_core::error::AppError;
use reportdesk_core::result::AppResult;
use reportdesk_database::gateway::{
    AnnouncementStore, NotificationStore, ReportStore, UserStore,
};
use reportdesk_entity::announcement::{Announcement, NewAnnouncement};
use reportdesk_entity::notification::{NewNotification, Notification, NotificationKind};
use reportdesk_entity::report::{NewReport, Report, ReportStatus};
use reportdesk_entity::user::{CreateUser, User, UserRole};

/// Registration data for a test user.
pub fn sample_user(username: &str, role: UserRole) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password: "secret1".to_string(),
        full_name: format!("{username} full name"),
        address: "1 Test Street".to_string(),
        gender: None,
        email: format!("{username}@example.com"),
        contact_number: None,
        birthday: None,
        role,
    }
}

/// Submission data for a test report.
pub fn sample_report(resident_id: i64) -> NewReport {
    NewReport {
        resident_id,
        report_type: "Road Damage".to_string(),
        location: "Main St.".to_string(),
        description: "Pothole near the crosswalk".to_string(),
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    next_id: AtomicI64,
    rows: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn all_user_ids(&self) -> Vec<i64> {
        self.rows.lock().unwrap().iter().map(|u| u.id).collect()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &CreateUser) -> AppResult<User> {
        user.validate()?;
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::duplicate_entry("Username or email already exists"));
        }
        let now = Utc::now();
        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: user.username.clone(),
            password: user.password.clone(),
            full_name: user.full_name.clone(),
            address: user.address.clone(),
            gender: user.gender.clone(),
            email: user.email.clone(),
            contact_number: user.contact_number.clone(),
            birthday: user.birthday.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        if user.id <= 0 {
            return Err(AppError::validation("User id must be positive"));
        }
        user.validate()?;
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        *existing = User {
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(existing.clone())
    }

    async fn update_password(&self, user_id: i64, new_password: &str) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.password = new_password.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct MemoryReportStore {
    next_id: AtomicI64,
    rows: Mutex<Vec<Report>>,
}

impl MemoryReportStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn create(&self, report: &NewReport) -> AppResult<Report> {
        report.validate()?;
        let now = Utc::now();
        let created = Report {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            resident_id: report.resident_id,
            report_type: report.report_type.clone(),
            location: report.location.clone(),
            description: report.description.clone(),
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Report>> {
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn find_by_resident(&self, resident_id: i64) -> AppResult<Vec<Report>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.resident_id == resident_id)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: ReportStatus) -> AppResult<Vec<Report>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, report: &Report) -> AppResult<Report> {
        if report.id <= 0 {
            return Err(AppError::validation("Report id must be positive"));
        }
        report.validate()?;
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|r| r.id == report.id)
            .ok_or_else(|| AppError::not_found("Report not found"))?;
        *existing = Report {
            updated_at: Utc::now(),
            ..report.clone()
        };
        Ok(existing.clone())
    }

    async fn update_status(&self, report_id: i64, status: ReportStatus) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == report_id) {
            Some(report) => {
                report.status = status;
                report.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn count_by_status(&self, status: ReportStatus) -> AppResult<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == status)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct MemoryAnnouncementStore {
    next_id: AtomicI64,
    rows: Mutex<Vec<Announcement>>,
}

impl MemoryAnnouncementStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AnnouncementStore for MemoryAnnouncementStore {
    async fn create(&self, announcement: &NewAnnouncement) -> AppResult<Announcement> {
        announcement.validate()?;
        let now = Utc::now();
        let created = Announcement {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            admin_id: announcement.admin_id,
            title: announcement.title.clone(),
            content: announcement.content.clone(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Announcement>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Announcement>> {
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Announcement>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_by_admin(&self, admin_id: i64) -> AppResult<Vec<Announcement>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|a| a.admin_id == admin_id)
            .cloned()
            .collect())
    }

    async fn update(&self, announcement: &Announcement) -> AppResult<Announcement> {
        if announcement.id <= 0 {
            return Err(AppError::validation("Announcement id must be positive"));
        }
        announcement.validate()?;
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|a| a.id == announcement.id)
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;
        *existing = Announcement {
            updated_at: Utc::now(),
            ..announcement.clone()
        };
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

pub struct MemoryNotificationStore {
    next_id: AtomicI64,
    rows: Mutex<Vec<Notification>>,
    /// Backs the batched all-users insert, like the SELECT over the users
    /// table in the real repository.
    users: Arc<MemoryUserStore>,
}

impl MemoryNotificationStore {
    pub fn new(users: Arc<MemoryUserStore>) -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(0),
            rows: Mutex::new(Vec::new()),
            users,
        })
    }

    fn insert(&self, notification: &NewNotification) -> Notification {
        let now = Utc::now();
        let created = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id: notification.user_id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind,
            related_id: notification.related_id,
            is_read: false,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        created
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, notification: &NewNotification) -> AppResult<Notification> {
        notification.validate()?;
        Ok(self.insert(notification))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_unread_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Notification>> {
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn mark_read(&self, notification_id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|n| n.id == notification_id) {
            Some(notification) => {
                notification.is_read = true;
                notification.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read_for_user(&self, user_id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let mut changed = false;
        for notification in rows.iter_mut() {
            if notification.user_id == user_id && !notification.is_read {
                notification.is_read = true;
                notification.updated_at = Utc::now();
                changed = true;
            }
        }
        Ok(changed)
    }

    async fn unread_count(&self, user_id: i64) -> AppResult<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as i64)
    }

    async fn create_for_all_users(
        &self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        related_id: Option<i64>,
    ) -> AppResult<u64> {
        let user_ids = self.users.all_user_ids();
        for user_id in &user_ids {
            self.insert(&NewNotification {
                user_id: *user_id,
                title: title.to_string(),
                message: message.to_string(),
                kind,
                related_id,
            });
        }
        Ok(user_ids.len() as u64)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| n.id != id);
        Ok(rows.len() < before)
    }
}
