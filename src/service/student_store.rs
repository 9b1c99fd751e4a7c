use crate::db::models::{Student, StudentId};
use crate::error::StudentError;

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::collections::BTreeMap;
use tracing::debug;

/// Messages handled by the store actor. One message is one atomic operation.
#[derive(Debug)]
pub enum StoreMessage {
    /// Assign an id if the record has none, then insert or overwrite it.
    Save(Student, RpcReplyPort<Student>),
    /// Snapshot of every stored record, ascending by id.
    FindAll(RpcReplyPort<Vec<Student>>),
    /// Overwrite every field but the id of an existing record. `None` if absent.
    Update(StudentId, Student, RpcReplyPort<Option<Student>>),
    FindById(StudentId, RpcReplyPort<Option<Student>>),
    /// Replies whether a record was actually removed.
    DeleteById(StudentId, RpcReplyPort<bool>),
    Len(RpcReplyPort<usize>),
}

/// Handle for interacting with the store actor.
#[derive(Clone)]
pub struct StoreHandle {
    actor: ActorRef<StoreMessage>,
}

impl StoreHandle {
    pub async fn save(&self, student: Student) -> Result<Student, StudentError> {
        ractor::call!(self.actor, StoreMessage::Save, student)
            .map_err(|e| StudentError::StoreUnavailable(format!("Save RPC failed: {e}")))
    }

    pub async fn find_all(&self) -> Result<Vec<Student>, StudentError> {
        ractor::call!(self.actor, StoreMessage::FindAll)
            .map_err(|e| StudentError::StoreUnavailable(format!("FindAll RPC failed: {e}")))
    }

    /// `Ok(None)` is the ordinary "no such student" outcome.
    pub async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentError> {
        ractor::call!(self.actor, StoreMessage::FindById, id)
            .map_err(|e| StudentError::StoreUnavailable(format!("FindById RPC failed: {e}")))
    }

    /// Find and overwrite in one step; a missing id is left untouched.
    pub async fn update(
        &self,
        id: StudentId,
        fields: Student,
    ) -> Result<Option<Student>, StudentError> {
        ractor::call!(self.actor, StoreMessage::Update, id, fields)
            .map_err(|e| StudentError::StoreUnavailable(format!("Update RPC failed: {e}")))
    }

    pub async fn delete_by_id(&self, id: StudentId) -> Result<bool, StudentError> {
        ractor::call!(self.actor, StoreMessage::DeleteById, id)
            .map_err(|e| StudentError::StoreUnavailable(format!("DeleteById RPC failed: {e}")))
    }

    pub async fn len(&self) -> Result<usize, StudentError> {
        ractor::call!(self.actor, StoreMessage::Len)
            .map_err(|e| StudentError::StoreUnavailable(format!("Len RPC failed: {e}")))
    }

    /// Stop the actor. Later calls fail with `StoreUnavailable`.
    pub fn shutdown(&self) {
        self.actor.stop(None);
    }
}

struct StoreState {
    students: BTreeMap<StudentId, Student>,
    /// Next id to hand out. Starts at 1 and never goes back, even after deletes.
    next_id: StudentId,
}

impl StoreState {
    fn save(&mut self, mut student: Student) -> Student {
        let id = match student.id {
            Some(id) => id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                student.id = Some(id);
                debug!("ID: {id}, assigned to new student");
                id
            }
        };
        self.students.insert(id, student.clone());
        student
    }

    fn update(&mut self, id: StudentId, fields: Student) -> Option<Student> {
        let student = self.students.get_mut(&id)?;
        student.apply(fields);
        debug!("ID: {id}, updated in place");
        Some(student.clone())
    }
}

struct StudentStoreActor;

#[ractor::async_trait]
impl Actor for StudentStoreActor {
    type Msg = StoreMessage;
    type State = StoreState;
    type Arguments = ();

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        _arguments: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        Ok(StoreState {
            students: BTreeMap::new(),
            next_id: 1,
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            StoreMessage::Save(student, rp) => {
                let stored = state.save(student);
                let _ = rp.send(stored);
            }
            StoreMessage::FindAll(rp) => {
                let _ = rp.send(state.students.values().cloned().collect());
            }
            StoreMessage::Update(id, fields, rp) => {
                let _ = rp.send(state.update(id, fields));
            }
            StoreMessage::FindById(id, rp) => {
                let _ = rp.send(state.students.get(&id).cloned());
            }
            StoreMessage::DeleteById(id, rp) => {
                let removed = state.students.remove(&id).is_some();
                if removed {
                    debug!("ID: {id}, removed from store");
                }
                let _ = rp.send(removed);
            }
            StoreMessage::Len(rp) => {
                let _ = rp.send(state.students.len());
            }
        }
        Ok(())
    }
}

/// Spawn an empty store and return a handle to it.
pub async fn spawn() -> Result<StoreHandle, StudentError> {
    let (actor, _jh) = Actor::spawn(None, StudentStoreActor, ())
        .await
        .map_err(|e| StudentError::StoreUnavailable(format!("spawn failed: {e}")))?;
    Ok(StoreHandle { actor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use tokio::task::JoinSet;

    fn student(first: &str) -> Student {
        Student {
            id: None,
            first_name: first.to_string(),
            last_name: "Perez".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 5, 15).unwrap(),
            enrollment_number: "5001".to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids_starting_at_one() {
        let store = spawn().await.unwrap();
        let a = store.save(student("Juan")).await.unwrap();
        let b = store.save(student("Maria")).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_id_overwrites_in_place() {
        let store = spawn().await.unwrap();
        let mut saved = store.save(student("Juan")).await.unwrap();
        saved.email = "new@example.com".to_string();
        store.save(saved.clone()).await.unwrap();

        assert_eq!(store.len().await.unwrap(), 1);
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let store = spawn().await.unwrap();
        store.save(student("Juan")).await.unwrap();
        store.save(student("Maria")).await.unwrap();
        assert!(store.delete_by_id(2).await.unwrap());

        let c = store.save(student("Jose")).await.unwrap();
        assert_eq!(c.id, Some(3));
    }

    #[tokio::test]
    async fn find_and_delete_report_absence() {
        let store = spawn().await.unwrap();
        let saved = store.save(student("Juan")).await.unwrap();
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(saved));

        assert!(store.delete_by_id(1).await.unwrap());
        assert_eq!(store.find_by_id(1).await.unwrap(), None);
        assert!(!store.delete_by_id(1).await.unwrap());
        assert!(!store.delete_by_id(404).await.unwrap());
    }

    #[tokio::test]
    async fn update_overwrites_existing_and_skips_missing() {
        let store = spawn().await.unwrap();
        store.save(student("Juan")).await.unwrap();

        let mut fields = student("Juana");
        fields.id = Some(9);
        let updated = store.update(1, fields).await.unwrap().unwrap();
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.first_name, "Juana");
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(updated));

        assert_eq!(store.update(9, student("Ghost")).await.unwrap(), None);
        assert_eq!(store.find_by_id(9).await.unwrap(), None);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn update_racing_delete_never_resurrects() {
        let store = spawn().await.unwrap();
        store.save(student("Juan")).await.unwrap();

        let mut set = JoinSet::new();
        for i in 0..32 {
            let store = store.clone();
            set.spawn(async move {
                store.update(1, student(&format!("U{i}"))).await.map(|_| ())
            });
        }
        let deleter = store.clone();
        set.spawn(async move { deleter.delete_by_id(1).await.map(|_| ()) });

        while let Some(res) = set.join_next().await {
            res.unwrap().unwrap();
        }
        assert_eq!(store.find_by_id(1).await.unwrap(), None);
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn size_tracks_saves_minus_deletes() {
        let store = spawn().await.unwrap();
        for name in ["A", "B", "C", "D", "E"] {
            store.save(student(name)).await.unwrap();
        }
        store.delete_by_id(2).await.unwrap();
        store.delete_by_id(4).await.unwrap();
        store.delete_by_id(4).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        let ids: Vec<_> = all.iter().filter_map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_get_unique_ids() {
        let store = spawn().await.unwrap();
        let mut set = JoinSet::new();
        for i in 0..64 {
            let store = store.clone();
            set.spawn(async move { store.save(student(&format!("S{i}"))).await });
        }

        let mut ids = HashSet::new();
        while let Some(res) = set.join_next().await {
            let saved = res.unwrap().unwrap();
            assert!(ids.insert(saved.id.unwrap()));
        }
        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().max(), Some(&64));
    }

    #[tokio::test]
    async fn calls_after_shutdown_are_store_unavailable() {
        let store = spawn().await.unwrap();
        store.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StudentError::StoreUnavailable(_)));
    }
}
