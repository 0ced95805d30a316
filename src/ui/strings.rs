//! Thai UI copy.

pub const APP_TITLE: &str = "ระบบจัดการข้อมูลพนักงาน";
pub const MENU_EMPLOYEES: &str = "รายชื่อพนักงาน";
pub const MENU_PROFILE: &str = "ข้อมูลส่วนตัว";

pub const PAGE_TITLE: &str = "ข้อมูลพนักงาน";
pub const SEARCH_EMPLOYEE_ID: &str = "รหัสพนักงาน";
pub const SEARCH_EMPLOYEE_ID_PLACEHOLDER: &str = "เลือกรหัสพนักงาน";
pub const SEARCH_NAME: &str = "ชื่อพนักงาน";
pub const SEARCH_NAME_PLACEHOLDER: &str = "ระบุชื่อพนักงาน";
pub const SEARCH_BUTTON: &str = "ค้นหา";

pub const RESULTS_PREFIX: &str = "ผลลัพธ์การค้นหา";
pub const RESULTS_SUFFIX: &str = "รายการ";
pub const ADD_EMPLOYEE: &str = "เพิ่มพนักงาน";

pub const COLUMN_ID: &str = "รหัสพนักงาน";
pub const COLUMN_NAME: &str = "ชื่อพนักงาน";
pub const COLUMN_ADDRESS: &str = "ที่อยู่";
pub const COLUMN_ACTIONS: &str = "จัดการ";
pub const LOADING: &str = "กำลังโหลด...";
pub const EMPTY_TABLE: &str = "ไม่มีข้อมูล";

pub const MODAL_CREATE_TITLE: &str = "เพิ่มข้อมูลพนักงาน";
pub const MODAL_EDIT_TITLE: &str = "แก้ไขข้อมูลพนักงาน";
pub const MODAL_CREATE_OK: &str = "เพิ่มพนักงาน";
pub const MODAL_EDIT_OK: &str = "บันทึกการแก้ไข";
pub const CANCEL: &str = "ยกเลิก";

pub const CONFIRM_DELETE_TITLE: &str = "ยืนยันการลบข้อมูล";
pub const CONFIRM_DELETE_PROMPT: &str = "คุณต้องการลบข้อมูลพนักงาน";
pub const CONFIRM_DELETE_QUESTION: &str = "ใช่หรือไม่?";
pub const CONFIRM_DELETE_OK: &str = "ลบข้อมูล";

pub const CREATE_SUCCESS: &str = "เพิ่มข้อมูลพนักงานสำเร็จ";
pub const UPDATE_SUCCESS: &str = "อัพเดทข้อมูลพนักงานสำเร็จ";
pub const DELETE_SUCCESS: &str = "ลบข้อมูลพนักงานเรียบร้อยแล้ว";
pub const SUBMIT_FAILED: &str = "เกิดข้อผิดพลาด กรุณาลองใหม่อีกครั้ง";
pub const DELETE_FAILED: &str = "เกิดข้อผิดพลาดในการลบข้อมูล";

/// "ทั้งหมด N รายการ"
pub fn total_items(total: usize) -> String {
    format!("ทั้งหมด {} รายการ", total)
}
