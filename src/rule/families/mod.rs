//! 内置型号族规则
//! 新增型号族：新建一个实现 ModelRule 的文件，并在 builtin_rules 中追加一行

pub mod motor_ac;
pub mod plc_ab200;
pub mod sensor_tx;
pub mod sv630p;
pub mod xyz100;

pub use self::motor_ac::MotorAcRule;
pub use self::plc_ab200::PlcAb200Rule;
pub use self::sensor_tx::SensorTxRule;
pub use self::sv630p::Sv630pRule;
pub use self::xyz100::Xyz100Rule;

use super::core::ModelRule;

/// 内置规则，按注册顺序排列
pub fn builtin_rules() -> Vec<Box<dyn ModelRule>> {
    vec![
        Box::new(MotorAcRule),
        Box::new(PlcAb200Rule),
        Box::new(SensorTxRule),
        Box::new(Sv630pRule),
        Box::new(Xyz100Rule),
    ]
}
