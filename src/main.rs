use iced::{Element, Task, Theme};
use iced::widget::{button, canvas, column, container, image, stack, text, Column};
use iced::{Alignment, Length};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

// Declare the application modules
mod photos;
mod state;
mod ui;

use photos::access::{self, AccessStatus};
use photos::remover::RemoveError;
use state::data::PhotoEntry;
use state::session::{ReviewSession, SwipeAction};
use state::settings::AppSettings;

/// Main application state
struct PhotoSweep {
    /// Persistent user settings
    settings: AppSettings,
    /// Result of the photo access check; None while it is still running
    access: Option<bool>,
    /// The review session over the loaded batch
    session: ReviewSession,
    /// Resolved display paths (original or cached preview), keyed by entry id
    previews: HashMap<String, PathBuf>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The photo access check settled
    AccessChecked(AccessStatus),
    /// The folder scan completed
    PhotosLoaded(Result<Vec<PhotoEntry>, String>),
    /// A display preview is ready for an entry
    PreviewReady(Result<(String, PathBuf), String>),
    /// The pointer moved while dragging over the photo
    SwipeMoved(f32),
    /// The deletion capability settled
    DeleteSettled(Result<String, RemoveError>),
    /// Present the next undecided photo
    Advance,
    /// User clicked "Choose Folder..."
    PickFolder,
    /// User clicked "Open Settings" on the denied screen
    OpenSettings,
}

impl PhotoSweep {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = AppSettings::load();
        println!("📷 Photo Sweep initialized");

        let folder = settings.resolved_photos_dir();
        let app = PhotoSweep {
            settings,
            access: None,
            session: ReviewSession::new(),
            previews: HashMap::new(),
            status: String::from("Requesting photo access..."),
        };

        (
            app,
            Task::perform(access::request_photo_access(folder), Message::AccessChecked),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AccessChecked(AccessStatus::Granted) => {
                self.access = Some(true);
                self.status = String::from("Loading photos...");

                if let Some(folder) = self.settings.resolved_photos_dir() {
                    return Task::perform(
                        photos::scanner::list_photos(folder, self.settings.batch_limit),
                        Message::PhotosLoaded,
                    );
                }

                Task::none()
            }
            Message::AccessChecked(AccessStatus::Denied) => {
                self.access = Some(false);
                self.status = String::from("Photo access required to continue.");
                Task::none()
            }
            Message::PhotosLoaded(Ok(entries)) => {
                self.session.load(entries);
                self.status = if self.session.is_exhausted() {
                    String::from("No photos found in this folder.")
                } else {
                    format!(
                        "{} photos to review. Drag right to keep, left to delete.",
                        self.session.total()
                    )
                };
                self.warm_previews()
            }
            Message::PhotosLoaded(Err(e)) => {
                eprintln!("⚠️  Scan failed: {}", e);
                self.session.load(Vec::new());
                self.status = format!("Could not load photos: {}", e);
                Task::none()
            }
            Message::PreviewReady(Ok((id, path))) => {
                self.previews.insert(id, path);
                Task::none()
            }
            Message::PreviewReady(Err(e)) => {
                // The viewer falls back to the original file
                eprintln!("⚠️  Preview generation failed: {}", e);
                Task::none()
            }
            Message::SwipeMoved(dx) => {
                match SwipeAction::classify(dx, self.settings.swipe_threshold) {
                    SwipeAction::Keep => {
                        if self.session.keep() {
                            if let Some(entry) = self.session.current() {
                                println!("👍 Keeping {}", entry.filename);
                            }
                            self.status = String::from("✅ Kept");
                            return self.schedule_advance();
                        }
                        Task::none()
                    }
                    SwipeAction::Delete => {
                        if let Some(entry) = self.session.begin_delete() {
                            self.status = format!("Deleting {}...", entry.filename);
                            return Task::perform(
                                photos::remover::remove_photo(entry),
                                Message::DeleteSettled,
                            );
                        }
                        Task::none()
                    }
                    SwipeAction::None => Task::none(),
                }
            }
            Message::DeleteSettled(Ok(id)) => {
                self.session.delete_succeeded(id);
                self.status = String::from("🗑️ Deleted");
                self.schedule_advance()
            }
            Message::DeleteSettled(Err(e)) => {
                // The entry stays presented; the user may swipe left again
                self.session.delete_failed();
                eprintln!("⚠️  Delete failed: {}", e);
                self.status = format!("Delete failed: {}. Swipe left to retry.", e);
                Task::none()
            }
            Message::Advance => {
                self.session.advance();

                if self.session.is_exhausted() {
                    println!("🎉 Review complete: {} photos decided", self.session.decided_count());
                    self.status = String::from("All done.");
                    Task::none()
                } else {
                    self.status = format!("{} photos left to review.", self.session.remaining());
                    self.warm_previews()
                }
            }
            Message::PickFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Photos")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.settings.photos_dir = Some(folder_path);
                    if let Err(e) = self.settings.save() {
                        eprintln!("⚠️  Failed to save settings: {}", e);
                    }

                    // Re-run the access check against the new folder
                    self.access = None;
                    self.previews.clear();
                    self.status = String::from("Requesting photo access...");
                    return Task::perform(
                        access::request_photo_access(self.settings.resolved_photos_dir()),
                        Message::AccessChecked,
                    );
                }

                Task::none()
            }
            Message::OpenSettings => {
                access::open_system_settings(self.settings.resolved_photos_dir().as_deref());
                Task::none()
            }
        }
    }

    /// Dwell on the decided photo, then present the next one
    fn schedule_advance(&self) -> Task<Message> {
        let delay = Duration::from_millis(self.settings.advance_delay_ms);
        Task::perform(tokio::time::sleep(delay), |_| Message::Advance)
    }

    /// Kick off preview generation for the presented photo and the next one
    fn warm_previews(&self) -> Task<Message> {
        let mut tasks = Vec::new();

        for entry in self.session.upcoming(2) {
            if !self.previews.contains_key(&entry.id) {
                tasks.push(Task::perform(
                    photos::preview::ensure_preview(
                        entry.clone(),
                        photos::preview::get_preview_cache_dir(),
                    ),
                    Message::PreviewReady,
                ));
            }
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Column<Message> = match self.access {
            None => column![
                text("Requesting photo access...").size(20),
            ],
            Some(false) => column![
                text("Photo access required to continue").size(24),
                text(
                    "Enable access to your photos folder in the system settings, \
                     or pick a different folder to review."
                )
                .size(14),
                button("Open Settings")
                    .on_press(Message::OpenSettings)
                    .padding(10),
                button("Choose Folder...")
                    .on_press(Message::PickFolder)
                    .padding(10),
            ],
            Some(true) => match self.session.current() {
                Some(entry) => {
                    // Prefer the cached preview, fall back to the original
                    let source = self
                        .previews
                        .get(&entry.id)
                        .cloned()
                        .unwrap_or_else(|| entry.path.clone());

                    column![
                        text(&entry.filename).size(16),
                        stack![
                            image(image::Handle::from_path(source))
                                .width(Length::Fixed(520.0))
                                .height(Length::Fixed(420.0)),
                            canvas(ui::viewer::SwipeArea {
                                threshold: self.settings.swipe_threshold,
                            })
                            .width(Length::Fixed(520.0))
                            .height(Length::Fixed(420.0)),
                        ],
                        text(&self.status).size(16),
                    ]
                }
                None => column![
                    text("No more photos to review.").size(24),
                    text(&self.status).size(16),
                ],
            },
        };

        container(content.spacing(20).padding(40).align_x(Alignment::Center))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Photo Sweep",
        PhotoSweep::update,
        PhotoSweep::view,
    )
    .theme(PhotoSweep::theme)
    .centered()
    .run_with(PhotoSweep::new)
}
