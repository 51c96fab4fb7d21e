//! FlyonUI components.
//!
//! Display and layout components wrap caller content in a single element.
//! Form controls render one input-like element. Interactive components
//! (accordion, tabs, collapse, drawer, modal, dropdown, swap) generate ids
//! and wire their toggles to the elements they control.

mod control;
mod shell;

pub mod accordion;
pub mod autocomplete;
pub mod blockquote;
pub mod breadcrumb;
pub mod choice;
pub mod collapse;
pub mod combobox;
pub mod data;
pub mod datepicker;
pub mod display;
pub mod divider;
pub mod drawer;
pub mod dropdown;
pub mod feedback;
pub mod fileinput;
pub mod formgroup;
pub mod formvalidation;
pub mod input;
pub mod layout;
pub mod modal;
pub mod progress;
pub mod range;
pub mod select;
pub mod swap;
pub mod tabs;
pub mod textarea;
pub mod toggle;
pub mod tooltip;
pub mod typography;

// Display and layout
pub use blockquote::Blockquote;
pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use data::{Indicator, Rating, Stats, Timeline};
pub use display::{Alert, Avatar, Badge, Button, Card};
pub use divider::Divider;
pub use feedback::{Loading, Skeleton, Spinner};
pub use layout::{Container, Flex, Grid, Stack};
pub use progress::Progress;
pub use tooltip::Tooltip;
pub use typography::{FontWeight, TextAlign, Typography};

// Form controls
pub use autocomplete::{Autocomplete, AutocompleteOption};
pub use choice::{Checkbox, Radio};
pub use combobox::{Combobox, ComboboxOption};
pub use datepicker::DatePicker;
pub use fileinput::FileInput;
pub use formgroup::FormGroup;
pub use formvalidation::FormValidation;
pub use input::{Input, InputType};
pub use range::Range;
pub use select::{Select, SelectOption};
pub use textarea::Textarea;
pub use toggle::Toggle;

// Interactive
pub use accordion::{Accordion, AccordionItem};
pub use collapse::{Collapse, CollapseIndicator};
pub use drawer::{Drawer, drawer_close_button, drawer_toggle_button};
pub use dropdown::{Dropdown, dropdown_divider, dropdown_header, dropdown_item};
pub use modal::{Modal, modal_action, modal_close_action};
pub use swap::Swap;
pub use tabs::{TabItem, Tabs};
